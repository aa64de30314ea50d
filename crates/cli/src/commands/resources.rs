//! Resources command implementation.

use anyhow::Result;

use super::CommandContext;
use crate::args::QueryArgs;

pub async fn run(ctx: &CommandContext, query: &QueryArgs) -> Result<()> {
    let client = ctx.puppetdb()?;
    let encoded = query.encoded_query()?;
    let resources = client.resources(&encoded, query.extra().as_ref()).await?;
    ctx.print_list(&resources)
}
