//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Reading the TLS PEM files (done by the client when building its transport).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig, TlsConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    master_url: Option<String>,
    cert: Option<PathBuf>,
    key: Option<PathBuf>,
    ca: Option<PathBuf>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    verbose: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored. Errors never include raw
    /// `.env` line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the PuppetDB base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the Puppet Server base URL.
    pub fn with_master_url(mut self, url: String) -> Self {
        self.master_url = Some(url);
        self
    }

    /// Set the client certificate path.
    pub fn with_cert(mut self, path: PathBuf) -> Self {
        self.cert = Some(path);
        self
    }

    /// Set the client private key path.
    pub fn with_key(mut self, path: PathBuf) -> Self {
        self.key = Some(path);
        self
    }

    /// Set the CA bundle path.
    pub fn with_ca(mut self, path: PathBuf) -> Self {
        self.ca = Some(path);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set verbose request logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Build the final configuration.
    ///
    /// Falls back to `http://localhost:8080` when no base URL was supplied.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            "base_url",
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let master_url = self
            .master_url
            .as_deref()
            .map(|url| validate_and_normalize_base_url("master_url", url))
            .transpose()?;

        let tls = match (self.cert, self.key) {
            (Some(cert), Some(key)) => Some(TlsConfig {
                cert,
                key,
                ca: self.ca,
            }),
            (None, None) => {
                if self.ca.is_some() {
                    tracing::debug!("CA bundle configured without a client certificate");
                }
                None
            }
            (Some(_), None) => {
                return Err(ConfigError::IncompleteTls {
                    message: "client certificate given without a private key".to_string(),
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompleteTls {
                    message: "private key given without a client certificate".to_string(),
                });
            }
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            verbose: self.verbose.unwrap_or(false),
        };

        Self::validate_timeout(&connection)?;

        Ok(Config {
            connection,
            tls,
            master_url,
        })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_master_url(&mut self, url: Option<String>) {
        self.master_url = url;
    }

    pub(crate) fn set_cert(&mut self, path: Option<PathBuf>) {
        self.cert = path;
    }

    pub(crate) fn set_key(&mut self, path: Option<PathBuf>) {
        self.key = path;
    }

    pub(crate) fn set_ca(&mut self, path: Option<PathBuf>) {
        self.ca = path;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_verbose(&mut self, verbose: Option<bool>) {
        self.verbose = verbose;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace, blank is treated as missing
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(field: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: field.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://puppetdb:8081): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: field.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: field.into(),
            message: "host is required (e.g. https://puppetdb:8081)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
