//! Required-key validation.
//!
//! Reports every missing key, not just the first. A key counts as missing
//! when it is absent or set to the empty string; a key that is set but
//! unreadable is an error of its own, never "missing".

use crate::config::loader::{non_empty, ConfigError, EnvSource};

/// Keys that must be set, in reporting order.
pub const REQUIRED_KEYS: [&str; 3] = ["DATABASE_URL", "API_KEY", "JWT_SECRET"];

/// Returns the required keys that are absent or empty, in `REQUIRED_KEYS` order.
pub fn missing_required<S: EnvSource + ?Sized>(
    source: &S,
) -> Result<Vec<&'static str>, ConfigError> {
    let mut missing = Vec::new();
    for key in REQUIRED_KEYS {
        if non_empty(source, key)?.is_none() {
            missing.push(key);
        }
    }
    Ok(missing)
}
