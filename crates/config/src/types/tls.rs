//! TLS material for mutual-TLS connections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths to the PEM files used for client-certificate authentication.
///
/// PuppetDB and Puppet Server both authenticate callers by the certificate
/// issued by the Puppet CA, so the same material usually serves both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Client certificate (PEM)
    pub cert: PathBuf,
    /// Private key for the client certificate (PEM)
    pub key: PathBuf,
    /// CA bundle used to verify the server (PEM); system roots when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<PathBuf>,
}
