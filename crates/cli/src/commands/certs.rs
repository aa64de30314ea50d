//! Certificate authority commands.
//!
//! `sign` and `revoke` issue a state change; `delete` removes the
//! certificate. Each prints the certificate name and the HTTP status the CA
//! answered with.

use anyhow::{Context, Result};
use clap::Subcommand;
use puppetdb_client::DesiredState;
use serde::Serialize;
use tracing::info;

use super::CommandContext;

#[derive(Subcommand)]
pub enum CertsCommand {
    /// List every certificate and request
    List,
    /// Show one certificate
    Show { name: String },
    /// Sign a pending certificate request
    Sign { name: String },
    /// Revoke a signed certificate
    Revoke { name: String },
    /// Delete a certificate from the CA
    Delete { name: String },
}

#[derive(Debug, Serialize)]
struct CertificateChange<'a> {
    name: &'a str,
    action: &'static str,
    status: u16,
}

pub async fn run(ctx: &CommandContext, command: CertsCommand) -> Result<()> {
    let client = ctx.master()?;

    match command {
        CertsCommand::List => ctx.print_list(&client.certificates().await?),
        CertsCommand::Show { name } => {
            let cert = client
                .certificate(&name)
                .await
                .with_context(|| format!("Failed to fetch certificate '{name}'"))?;
            ctx.print_one(&cert)
        }
        CertsCommand::Sign { name } => change_state(ctx, &client, &name, DesiredState::Signed).await,
        CertsCommand::Revoke { name } => {
            change_state(ctx, &client, &name, DesiredState::Revoked).await
        }
        CertsCommand::Delete { name } => {
            info!("Deleting certificate {}", name);
            let status = client
                .delete_certificate(&name)
                .await
                .with_context(|| format!("Failed to delete certificate '{name}'"))?;
            ctx.print_one(&CertificateChange {
                name: &name,
                action: "delete",
                status,
            })
        }
    }
}

async fn change_state(
    ctx: &CommandContext,
    client: &puppetdb_client::MasterClient,
    name: &str,
    state: DesiredState,
) -> Result<()> {
    info!("Setting certificate {} to {}", name, state);
    let status = client
        .update_certificate_state(name, state)
        .await
        .with_context(|| format!("Failed to set certificate '{name}' to {state}"))?;
    ctx.print_one(&CertificateChange {
        name,
        action: state.as_str(),
        status,
    })
}
