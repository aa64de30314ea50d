//! Certificate authority methods for [`MasterClient`].
//!
//! # What this module handles:
//! - Listing and inspecting certificates and signing requests
//! - Signing, revoking and deleting certificates
//!
//! # What this module does NOT handle:
//! - Generating keys or CSRs

use crate::client::MasterClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Certificate, DesiredState};

impl MasterClient {
    /// Every certificate and pending request known to the CA.
    pub async fn certificates(&self) -> Result<Vec<Certificate>> {
        endpoints::list_certificates(&self.transport.ctx()).await
    }

    /// One certificate by name.
    pub async fn certificate(&self, name: &str) -> Result<Certificate> {
        endpoints::get_certificate(&self.transport.ctx(), name).await
    }

    /// Sign or revoke `name`. Returns the HTTP status of the CA's answer.
    pub async fn update_certificate_state(&self, name: &str, state: DesiredState) -> Result<u16> {
        endpoints::update_certificate_state(&self.transport.ctx(), name, state).await
    }

    /// Delete `name` from the CA. Returns the HTTP status of the CA's answer.
    pub async fn delete_certificate(&self, name: &str) -> Result<u16> {
        endpoints::delete_certificate(&self.transport.ctx(), name).await
    }
}
