//! Reports command implementation.

use anyhow::{Context, Result};

use super::CommandContext;
use crate::args::QueryArgs;

pub async fn run(ctx: &CommandContext, hash: Option<String>, query: &QueryArgs) -> Result<()> {
    let client = ctx.puppetdb()?;

    let reports = match hash {
        Some(hash) => client
            .report_by_hash(&hash)
            .await
            .with_context(|| format!("Failed to fetch report {hash}"))?,
        None => {
            let encoded = query.encoded_query()?;
            client.reports(&encoded, query.extra().as_ref()).await?
        }
    };

    ctx.print_list(&reports)
}
