//! Event commands: `events` and `event-counts`.

use anyhow::Result;

use super::CommandContext;
use crate::args::QueryArgs;

pub async fn run(ctx: &CommandContext, query: &QueryArgs) -> Result<()> {
    let client = ctx.puppetdb()?;
    let encoded = query.encoded_query()?;
    let events = client.events(&encoded, query.extra().as_ref()).await?;
    ctx.print_list(&events)
}

pub async fn run_counts(ctx: &CommandContext, summarize_by: &str, query: &QueryArgs) -> Result<()> {
    let client = ctx.puppetdb()?;
    let encoded = query.encoded_query()?;
    let counts = client
        .event_counts(&encoded, summarize_by, query.extra().as_ref())
        .await?;
    ctx.print_list(&counts)
}
