//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid boolean or numeric values return `ConfigError::InvalidValue`.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BASE_URL, ENV_CA, ENV_CERT, ENV_KEY, ENV_MASTER_URL, ENV_SKIP_VERIFY, ENV_TIMEOUT,
    ENV_VERBOSE,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(url) = env_var_or_none(ENV_MASTER_URL) {
        loader.set_master_url(Some(url));
    }
    if let Some(cert) = env_var_or_none(ENV_CERT) {
        loader.set_cert(Some(PathBuf::from(cert)));
    }
    if let Some(key) = env_var_or_none(ENV_KEY) {
        loader.set_key(Some(PathBuf::from(key)));
    }
    if let Some(ca) = env_var_or_none(ENV_CA) {
        loader.set_ca(Some(PathBuf::from(ca)));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(parse_bool(ENV_SKIP_VERIFY, &skip)?));
    }
    if let Some(verbose) = env_var_or_none(ENV_VERBOSE) {
        loader.set_verbose(Some(parse_bool(ENV_VERBOSE, &verbose)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
