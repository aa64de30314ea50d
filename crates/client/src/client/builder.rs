//! Client builders for constructing [`PuppetDbClient`] and [`MasterClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, mutual TLS, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by the client methods in sibling modules)
//! - Loading settings from the environment (handled by `puppetdb-config`)
//!
//! # Invariants
//! - `base_url` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - PEM read or parse failures surface as [`ClientError::Tls`]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use puppetdb_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use reqwest::{Certificate, Identity};

use crate::client::{MasterClient, PuppetDbClient, Transport};
use crate::error::{ClientError, Result};
use crate::logging::{RequestLogger, TracingLogger};
use crate::metrics::MetricsCollector;

/// Settings shared by both builders.
struct TransportOptions {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
    cert: Option<PathBuf>,
    key: Option<PathBuf>,
    ca: Option<PathBuf>,
    verbose: bool,
    logger: Option<Arc<dyn RequestLogger>>,
    metrics: Option<MetricsCollector>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cert: None,
            key: None,
            ca: None,
            verbose: false,
            logger: None,
            metrics: None,
        }
    }
}

impl TransportOptions {
    fn apply_shared_config(&mut self, config: &Config) {
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.verbose = config.connection.verbose;
        if let Some(tls) = &config.tls {
            self.cert = Some(tls.cert.clone());
            self.key = Some(tls.key.clone());
            self.ca = tls.ca.clone();
        }
    }

    fn build(self, missing_url: &str) -> Result<Transport> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl(format!("{missing_url} is required")))?;
        let base_url = normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            let is_https = base_url.starts_with("https://");
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        match (&self.cert, &self.key) {
            (Some(cert), Some(key)) => {
                http_builder = http_builder.identity(load_identity(cert, key)?);
            }
            (None, None) => {}
            _ => {
                return Err(ClientError::Tls(
                    "client certificate and key must be given together".to_string(),
                ));
            }
        }

        if let Some(ca) = &self.ca {
            http_builder = http_builder.add_root_certificate(load_ca(ca)?);
        }

        let http = http_builder.build()?;
        let verbose = self.verbose;
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new(verbose)) as Arc<dyn RequestLogger>);

        Ok(Transport {
            http,
            base_url,
            timeout: self.timeout,
            logger,
            metrics: self.metrics,
        })
    }
}

/// Normalize a base URL by removing trailing slashes.
///
/// - `"https://puppetdb:8081/"` -> `"https://puppetdb:8081"`
/// - `"https://puppetdb:8081//"` -> `"https://puppetdb:8081"`
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn read_pem(path: &Path, what: &str) -> Result<Vec<u8>> {
    fs::read(path)
        .map_err(|e| ClientError::Tls(format!("cannot read {what} {}: {e}", path.display())))
}

fn load_identity(cert: &Path, key: &Path) -> Result<Identity> {
    let mut pem = read_pem(cert, "client certificate")?;
    pem.push(b'\n');
    pem.extend(read_pem(key, "client key")?);
    Identity::from_pem(&pem)
        .map_err(|e| ClientError::Tls(format!("invalid client certificate or key: {e}")))
}

fn load_ca(ca: &Path) -> Result<Certificate> {
    let pem = read_pem(ca, "CA bundle")?;
    Certificate::from_pem(&pem)
        .map_err(|e| ClientError::Tls(format!("invalid CA bundle {}: {e}", ca.display())))
}

/// Setters shared by both builders.
macro_rules! transport_setters {
    () => {
        /// Set the base URL of the server, including protocol and port.
        ///
        /// Trailing slashes will be automatically removed.
        pub fn base_url(mut self, url: String) -> Self {
            self.options.base_url = Some(url);
            self
        }

        /// Set whether to skip TLS certificate verification.
        ///
        /// # Security Warning
        /// Only use this against self-signed development setups.
        pub fn skip_verify(mut self, skip: bool) -> Self {
            self.options.skip_verify = skip;
            self
        }

        /// Set the overall request timeout. Default is 30 seconds.
        pub fn timeout(mut self, timeout: Duration) -> Self {
            self.options.timeout = timeout;
            self
        }

        /// Present a client certificate (PEM files) for mutual TLS.
        pub fn client_certificate(mut self, cert: PathBuf, key: PathBuf) -> Self {
            self.options.cert = Some(cert);
            self.options.key = Some(key);
            self
        }

        /// Verify the server against this CA bundle (PEM) in addition to system roots.
        pub fn ca_certificate(mut self, ca: PathBuf) -> Self {
            self.options.ca = Some(ca);
            self
        }

        /// Log request attempts at `info` instead of `debug`.
        ///
        /// Ignored when a custom logger is installed.
        pub fn verbose(mut self, verbose: bool) -> Self {
            self.options.verbose = verbose;
            self
        }

        /// Replace the default [`TracingLogger`].
        pub fn logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
            self.options.logger = Some(logger);
            self
        }

        /// Set the metrics collector for API call performance tracking.
        pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
            self.options.metrics = Some(metrics);
            self
        }
    };
}

/// Builder for creating a new [`PuppetDbClient`].
///
/// # Example
///
/// ```rust,ignore
/// use puppetdb_client::PuppetDbClient;
///
/// let client = PuppetDbClient::builder()
///     .base_url("https://puppetdb:8081".to_string())
///     .client_certificate("/etc/puppetlabs/puppet/ssl/certs/host.pem".into(),
///                         "/etc/puppetlabs/puppet/ssl/private_keys/host.pem".into())
///     .ca_certificate("/etc/puppetlabs/puppet/ssl/certs/ca.pem".into())
///     .build()?;
/// ```
#[derive(Default)]
pub struct PuppetDbClientBuilder {
    options: TransportOptions,
}

impl PuppetDbClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    transport_setters!();

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.options.base_url = Some(config.connection.base_url.clone());
        self.options.apply_shared_config(config);
        self
    }

    /// Build the [`PuppetDbClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::Tls`] if TLS material cannot be loaded.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PuppetDbClient> {
        Ok(PuppetDbClient {
            transport: self.options.build("base_url")?,
        })
    }
}

/// Builder for creating a new [`MasterClient`].
#[derive(Default)]
pub struct MasterClientBuilder {
    options: TransportOptions,
}

impl MasterClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    transport_setters!();

    /// Create a client builder from configuration, targeting `master_url`.
    ///
    /// `build()` fails when the configuration has no master URL.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.options.base_url = config.master_url.clone();
        self.options.apply_shared_config(config);
        self
    }

    /// Build the [`MasterClient`] with the configured options.
    pub fn build(self) -> Result<MasterClient> {
        Ok(MasterClient {
            transport: self.options.build("master_url")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puppetdb_config::TlsConfig;

    #[test]
    fn test_from_config_plain() {
        let config = Config::with_base_url("http://puppetdb.example.com:8080".to_string());

        let client = PuppetDbClient::builder().from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "http://puppetdb.example.com:8080");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_base_url("https://puppetdb:8081/".to_string());
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);
        config.connection.verbose = true;

        let builder = PuppetDbClient::builder().from_config(&config);
        assert_eq!(
            builder.options.base_url.as_deref(),
            Some("https://puppetdb:8081/")
        );
        assert!(builder.options.skip_verify);
        assert!(builder.options.verbose);
        assert_eq!(builder.options.timeout, Duration::from_secs(120));

        let client = builder.build().unwrap();
        assert_eq!(client.base_url(), "https://puppetdb:8081");
    }

    #[test]
    fn test_build_without_base_url() {
        let err = PuppetDbClient::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(ref m) if m.contains("base_url")));
    }

    #[test]
    fn test_master_from_config_requires_master_url() {
        let config = Config::with_base_url("http://puppetdb:8080".to_string());
        let err = MasterClient::builder().from_config(&config).build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(ref m) if m.contains("master_url")));

        let mut config = config;
        config.master_url = Some("https://puppet:8140/".to_string());
        let client = MasterClient::builder().from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "https://puppet:8140");
    }

    #[test]
    fn test_missing_pem_files_are_tls_errors() {
        let mut config = Config::with_base_url("https://puppetdb:8081".to_string());
        config.tls = Some(TlsConfig {
            cert: PathBuf::from("/nonexistent/cert.pem"),
            key: PathBuf::from("/nonexistent/key.pem"),
            ca: None,
        });

        let err = PuppetDbClient::builder().from_config(&config).build().unwrap_err();
        assert!(matches!(err, ClientError::Tls(ref m) if m.contains("client certificate")));
    }

    #[test]
    fn test_unreadable_ca_is_tls_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ca.pem");

        let err = PuppetDbClient::builder()
            .base_url("https://puppetdb:8081".to_string())
            .ca_certificate(missing)
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::Tls(ref m) if m.contains("CA bundle")));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://puppetdb:8081/".to_string()),
            "https://puppetdb:8081"
        );
        assert_eq!(
            normalize_base_url("https://puppetdb:8081".to_string()),
            "https://puppetdb:8081"
        );
        assert_eq!(
            normalize_base_url("https://example.com:8081//".to_string()),
            "https://example.com:8081"
        );
    }
}
