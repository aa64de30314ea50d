//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Route parsed CLI commands to their implementations.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::Result;

use crate::args::Commands;
use crate::commands::{self, CommandContext};

pub async fn run_command(command: Commands, ctx: &CommandContext) -> Result<()> {
    match command {
        Commands::Nodes => commands::nodes::run(ctx).await,
        Commands::FactNames => commands::facts::run_names(ctx).await,
        Commands::Facts { node, name, query } => {
            commands::facts::run(ctx, node, name, &query).await
        }
        Commands::Events { query } => commands::events::run(ctx, &query).await,
        Commands::EventCounts {
            summarize_by,
            query,
        } => commands::events::run_counts(ctx, &summarize_by, &query).await,
        Commands::Reports { hash, query } => commands::reports::run(ctx, hash, &query).await,
        Commands::Resources { query } => commands::resources::run(ctx, &query).await,
        Commands::Metrics { command } => commands::metrics::run(ctx, command).await,
        Commands::Version => commands::version::run(ctx).await,
        Commands::Master { command } => commands::master::run(ctx, command).await,
        Commands::Certs { command } => commands::certs::run(ctx, command).await,
    }
}
