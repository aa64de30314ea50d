//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, verbosity).
//! - Define the main `Config` structure combining connection, TLS and master settings.
//! - Provide serialization helpers for `Duration`.
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `Config::default()` targets a local plain-HTTP PuppetDB (localhost:8080).

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::tls::TlsConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a PuppetDB (or Puppet Server) endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the server (e.g., https://puppetdb.example.com:8081)
    pub base_url: String,
    /// Whether to trust any server certificate (self-signed setups)
    #[serde(default)]
    pub skip_verify: bool,
    /// Overall request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Promote per-request logging from debug to info
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// PuppetDB connection settings
    pub connection: ConnectionConfig,
    /// Mutual TLS material, shared by PuppetDB and Puppet Server connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
    /// Puppet Server base URL, when master operations are needed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_url: Option<String>,
}

impl Config {
    /// Create a configuration for a plain connection to `base_url`.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Whether requests will present a client certificate.
    pub fn uses_client_certificate(&self) -> bool {
        self.tls.is_some()
    }
}
