//! Puppet CA certificate models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{string_or_null, vec_or_null};

/// Lifecycle state reported by the CA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateState {
    Requested,
    Signed,
    Revoked,
    /// Any state this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// State a caller may ask the CA to move a certificate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    Signed,
    Revoked,
}

impl DesiredState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DesiredState::Signed => "signed",
            DesiredState::Revoked => "revoked",
        }
    }
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a certificate state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateStateChange {
    pub desired_state: DesiredState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateFingerprints {
    #[serde(rename = "SHA1")]
    pub sha1: Option<String>,
    #[serde(rename = "SHA256")]
    pub sha256: Option<String>,
    #[serde(rename = "SHA512")]
    pub sha512: Option<String>,
    pub default: Option<String>,
}

/// One certificate (or signing request) known to the CA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(deserialize_with = "string_or_null")]
    pub name: String,
    pub state: CertificateState,
    #[serde(deserialize_with = "vec_or_null")]
    pub dns_alt_names: Vec<String>,
    #[serde(deserialize_with = "vec_or_null")]
    pub subject_alt_names: Vec<String>,
    pub fingerprint: Option<String>,
    pub fingerprints: Option<CertificateFingerprints>,
    pub not_before: Option<String>,
    pub not_after: Option<String>,
}
