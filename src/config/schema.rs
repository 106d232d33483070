//! Settings schema definitions.
//!
//! The settings record is built once by the loader and then only read.
//! Secrets never show up in `Debug` output.

use std::fmt;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, taken from `NODE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
    /// Any other name, kept verbatim (e.g. "staging").
    Other(String),
}

impl Environment {
    /// Parse an environment name. Known names are matched case-insensitively.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "development" => Environment::Development,
            "production" => Environment::Production,
            "test" => Environment::Test,
            _ => Environment::Other(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Other(name) => name,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide backend settings.
///
/// Fields are private; use the getters. Construct through
/// `Settings::from_env` or `Settings::from_source`.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub(crate) port: u16,
    pub(crate) database_url: String,
    pub(crate) api_key: String,
    pub(crate) environment: Environment,
    pub(crate) jwt_secret: String,
}

impl Settings {
    /// Listen port (`PORT`, default 3000).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Database connection URI (`DATABASE_URL`).
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Third-party API key (`API_KEY`).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Deployment environment (`NODE_ENV`, default development).
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Token signing secret (`JWT_SECRET`).
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("port", &self.port)
            .field("database_url", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}
