//! `pdb` - command-line interface for PuppetDB and Puppet Server.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute queries through the shared client library.
//! - Print results as JSON or NDJSON on stdout; logs go to stderr.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - CLI flags override environment variables, which override defaults.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use commands::CommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use formatters::OutputFormat;
use puppetdb_client::{MetricsExporter, TracingConfig};
use puppetdb_config::{Config, ConfigLoader};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::UsageError.as_i32());
    }

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let default_filter = if cli.verbose || cli.otlp_endpoint.is_some() {
        "info"
    } else {
        "warn"
    };
    let mut tracing_config = TracingConfig::new()
        .with_service_name("pdb")
        .with_default_filter(default_filter)
        .with_targets(&config);
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let exit_code = match run(cli, config, metrics_exporter.is_some()).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    // Flush batched spans before exit
    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli, config: Config, metrics: bool) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let ctx = CommandContext {
        config,
        format,
        metrics,
    };
    run_command(cli.command, &ctx).await
}

/// Merge environment variables and CLI flags into a validated [`Config`].
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref url) = cli.master_url {
        loader = loader.with_master_url(url.clone());
    }
    if let Some(ref cert) = cli.cert {
        loader = loader.with_cert(cert.clone());
    }
    if let Some(ref key) = cli.key {
        loader = loader.with_key(key.clone());
    }
    if let Some(ref ca) = cli.ca {
        loader = loader.with_ca(ca.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if cli.verbose {
        loader = loader.with_verbose(true);
    }

    Ok(loader.build()?)
}
