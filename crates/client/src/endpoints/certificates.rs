//! Puppet CA certificate-status endpoints.

use reqwest::Method;
use tracing::debug;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{
    CA_PREFIX, RequestContext, build_url, get_many, get_one, send_request, send_with_body,
};
use crate::error::{ClientError, Result};
use crate::models::{Certificate, CertificateStateChange, DesiredState};
use crate::params::ParameterSet;

fn status_url(ctx: &RequestContext<'_>, certname: &str) -> String {
    let endpoint = format!("certificate_status/{}", encode_path_segment(certname));
    build_url(ctx.base_url, CA_PREFIX, &endpoint, &ParameterSet::new())
}

/// Every certificate and pending request known to the CA.
pub async fn list_certificates(ctx: &RequestContext<'_>) -> Result<Vec<Certificate>> {
    let url = build_url(
        ctx.base_url,
        CA_PREFIX,
        "certificate_statuses/any",
        &ParameterSet::new(),
    );
    get_many(ctx, &url, "certificate_statuses").await
}

/// One certificate by name.
pub async fn get_certificate(ctx: &RequestContext<'_>, certname: &str) -> Result<Certificate> {
    get_one(ctx, &status_url(ctx, certname), "certificate_status").await
}

/// Ask the CA to sign or revoke a certificate. Returns the HTTP status.
pub async fn update_certificate_state(
    ctx: &RequestContext<'_>,
    certname: &str,
    state: DesiredState,
) -> Result<u16> {
    let body = serde_json::to_value(CertificateStateChange {
        desired_state: state,
    })
    .map_err(ClientError::Encode)?;
    let response = send_with_body(
        ctx,
        Method::PUT,
        &status_url(ctx, certname),
        "certificate_status",
        Some(&body),
    )
    .await?;
    let status = response.status().as_u16();
    debug!(certname, state = state.as_str(), status, "Certificate state updated");
    Ok(status)
}

/// Remove a certificate from the CA. Returns the HTTP status.
pub async fn delete_certificate(ctx: &RequestContext<'_>, certname: &str) -> Result<u16> {
    let response = send_request(
        ctx,
        Method::DELETE,
        &status_url(ctx, certname),
        "certificate_status",
        None,
    )
    .await?;
    Ok(response.status().as_u16())
}
