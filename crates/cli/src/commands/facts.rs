//! Fact commands: `fact-names` and `facts`.

use anyhow::{Context, Result};
use tracing::info;

use super::CommandContext;
use crate::args::QueryArgs;

pub async fn run_names(ctx: &CommandContext) -> Result<()> {
    let client = ctx.puppetdb()?;
    let names = client.fact_names().await?;
    ctx.print_list(&names)
}

/// `--node` wins over `--name`, which wins over the query flags.
pub async fn run(
    ctx: &CommandContext,
    node: Option<String>,
    name: Option<String>,
    query: &QueryArgs,
) -> Result<()> {
    let client = ctx.puppetdb()?;

    let facts = if let Some(node) = node {
        info!("Listing facts of {}", node);
        client
            .node_facts(&node)
            .await
            .with_context(|| format!("Failed to fetch facts of node '{node}'"))?
    } else if let Some(name) = name {
        info!("Listing fact '{}' across nodes", name);
        client
            .fact_per_node(&name)
            .await
            .with_context(|| format!("Failed to fetch fact '{name}'"))?
    } else {
        let encoded = query.encoded_query()?;
        client.facts(&encoded, query.extra().as_ref()).await?
    };

    ctx.print_list(&facts)
}
