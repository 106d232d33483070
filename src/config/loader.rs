//! Settings loading from the environment.

use std::collections::HashMap;
use std::env::{self, VarError};

use thiserror::Error;

use crate::config::schema::{Environment, Settings, DEFAULT_PORT};
use crate::config::validation::missing_required;

/// Error type for settings loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required keys are absent or empty.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),

    /// A key is set but its value cannot be used.
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// A key/value source of environment inputs.
///
/// `Ok(None)` means the key is unset. A value that is set but unusable
/// (e.g. not valid UTF-8) is an error, never "unset".
pub trait EnvSource {
    fn get(&self, key: &'static str) -> Result<Option<String>, ConfigError>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &'static str) -> Result<Option<String>, ConfigError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
                key,
                value: raw.to_string_lossy().into_owned(),
                reason: "not valid UTF-8".to_string(),
            }),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &'static str) -> Result<Option<String>, ConfigError> {
        Ok(HashMap::get(self, key).cloned())
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &'static str) -> Result<Option<String>, ConfigError> {
        (**self).get(key)
    }
}

/// Read a key, treating the empty string as unset.
pub(crate) fn non_empty<S: EnvSource + ?Sized>(
    source: &S,
    key: &'static str,
) -> Result<Option<String>, ConfigError> {
    Ok(source.get(key)?.filter(|v| !v.is_empty()))
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is read first;
    /// variables already set in the process take precedence over it.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(&ProcessEnv)
    }

    /// Load and validate settings from an arbitrary source.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let missing = missing_required(source)?;
        if !missing.is_empty() {
            return Err(ConfigError::MissingRequired(missing));
        }

        let port = match non_empty(source, "PORT")? {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let environment = non_empty(source, "NODE_ENV")?
            .map(|name| Environment::parse(&name))
            .unwrap_or_default();

        // Presence of the required keys was checked above.
        let required = |key: &'static str| -> Result<String, ConfigError> {
            Ok(non_empty(source, key)?.unwrap_or_default())
        };

        Ok(Settings {
            port,
            database_url: required("DATABASE_URL")?,
            api_key: required("API_KEY")?,
            environment,
            jwt_secret: required("JWT_SECRET")?,
        })
    }
}
