//! Metrics command implementation.

use anyhow::Result;
use clap::Subcommand;
use puppetdb_client::models::{MBEAN_AVG_RESOURCES_PER_NODE, MBEAN_NUM_NODES, MBEAN_NUM_RESOURCES};
use serde::Serialize;
use serde_json::Value;

use super::CommandContext;

#[derive(Subcommand)]
pub enum MetricsCommand {
    /// Number of active nodes
    NumNodes,
    /// Number of resources across all nodes
    NumResources,
    /// Average number of resources per node
    ResourcesPerNode,
    /// Raw value of any mbean
    Mbean {
        /// Full mbean name (e.g., java.lang:type=Memory)
        name: String,
    },
}

/// A population gauge together with the mbean it came from.
#[derive(Debug, Serialize)]
struct Gauge<'a> {
    mbean: &'a str,
    value: f64,
}

pub async fn run(ctx: &CommandContext, command: MetricsCommand) -> Result<()> {
    let client = ctx.puppetdb()?;

    let (mbean, value) = match command {
        MetricsCommand::NumNodes => (MBEAN_NUM_NODES, client.metric_num_nodes().await?),
        MetricsCommand::NumResources => {
            (MBEAN_NUM_RESOURCES, client.metric_num_resources().await?)
        }
        MetricsCommand::ResourcesPerNode => (
            MBEAN_AVG_RESOURCES_PER_NODE,
            client.metric_resources_per_node().await?,
        ),
        MetricsCommand::Mbean { name } => {
            let raw: Value = client.metric(&name).await?;
            return ctx.print_one(&raw);
        }
    };

    ctx.print_one(&Gauge { mbean, value })
}
