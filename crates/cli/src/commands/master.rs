//! Puppet Server status commands.

use anyhow::Result;
use clap::Subcommand;

use super::CommandContext;

#[derive(Subcommand)]
pub enum MasterCommand {
    /// Profiler timings per function, resource and catalog phase
    Profiler,
    /// JRuby pool usage
    Jruby,
    /// HTTP and catalog compile timings
    Master,
    /// JVM heap, threads and GC of the status service
    Service,
}

pub async fn run(ctx: &CommandContext, command: MasterCommand) -> Result<()> {
    let client = ctx.master()?;

    match command {
        MasterCommand::Profiler => ctx.print_one(&client.profiler().await?),
        MasterCommand::Jruby => ctx.print_one(&client.jruby().await?),
        MasterCommand::Master => ctx.print_one(&client.master().await?),
        MasterCommand::Service => ctx.print_one(&client.service().await?),
    }
}
