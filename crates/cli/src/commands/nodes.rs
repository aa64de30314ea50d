//! Nodes command implementation.

use anyhow::Result;
use tracing::info;

use super::CommandContext;

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let client = ctx.puppetdb()?;
    info!("Listing nodes from {}", client.base_url());

    let nodes = client.nodes().await?;
    ctx.print_list(&nodes)
}
