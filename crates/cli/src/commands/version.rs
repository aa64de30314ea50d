//! Version command implementation.

use anyhow::Result;

use super::CommandContext;

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let client = ctx.puppetdb()?;
    let version = client.version().await?;
    ctx.print_one(&version)
}
