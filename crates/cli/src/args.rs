//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read connection settings from flags or their `PUPPETDB_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `puppetdb_config::ConfigLoader`).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "pdb")]
#[command(about = "Query PuppetDB and Puppet Server from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pdb nodes\n  pdb facts --node web01.example.com\n  pdb events --query '[\"=\",\"status\",\"failure\"]'\n  pdb event-counts --certname web01.example.com --summarize-by resource\n  pdb --master-url https://puppet:8140 certs list\n"
)]
pub struct Cli {
    /// Base URL of PuppetDB (e.g., http://localhost:8080)
    #[arg(long, global = true, env = "PUPPETDB_URL")]
    pub url: Option<String>,

    /// Base URL of Puppet Server (e.g., https://puppet:8140)
    #[arg(long, global = true, env = "PUPPETDB_MASTER_URL")]
    pub master_url: Option<String>,

    /// Client certificate (PEM) for mutual TLS
    #[arg(long, global = true, env = "PUPPETDB_CERT", value_name = "FILE")]
    pub cert: Option<PathBuf>,

    /// Private key (PEM) for the client certificate
    #[arg(long, global = true, env = "PUPPETDB_KEY", value_name = "FILE")]
    pub key: Option<PathBuf>,

    /// CA bundle (PEM) used to verify the server
    #[arg(long, global = true, env = "PUPPETDB_CA", value_name = "FILE")]
    pub ca: Option<PathBuf>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PUPPETDB_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log every request at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, ndjson)
    #[arg(short, long, global = true, default_value = "json")]
    pub output: String,

    /// OTLP collector endpoint for trace export (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "PUPPETDB_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9464)
    #[arg(long, global = true, env = "PUPPETDB_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Query selection shared by the PuppetDB query commands.
#[derive(Args, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Query expression as JSON text (e.g., '["=","certname","web01"]')
    #[arg(short, long, conflicts_with = "certname")]
    pub query: Option<String>,

    /// Shortcut for '["=","certname",NAME]'
    #[arg(long, value_name = "NAME")]
    pub certname: Option<String>,

    /// Extra request parameter, repeatable (e.g., --param limit=10)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every node known to PuppetDB
    Nodes,

    /// List the names of all facts
    FactNames,

    /// List facts for a node, for a fact name, or by query
    Facts {
        /// Facts of a single node
        #[arg(long, value_name = "CERTNAME", conflicts_with_all = ["name", "query", "certname"])]
        node: Option<String>,

        /// One fact across all nodes
        #[arg(long, conflicts_with_all = ["query", "certname"])]
        name: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List resource events
    Events {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Count resource events, grouped by a subject type
    EventCounts {
        /// Grouping: certname, resource or containing_class
        #[arg(long)]
        summarize_by: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List reports by query or by hash
    Reports {
        /// Report hash
        #[arg(long, conflicts_with_all = ["query", "certname"])]
        hash: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List catalog resources
    Resources {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Read PuppetDB metrics beans
    Metrics {
        #[command(subcommand)]
        command: commands::metrics::MetricsCommand,
    },

    /// Show the PuppetDB version
    Version,

    /// Read Puppet Server status services
    Master {
        #[command(subcommand)]
        command: commands::master::MasterCommand,
    },

    /// Manage certificates on the Puppet Server CA
    Certs {
        #[command(subcommand)]
        command: commands::certs::CertsCommand,
    },
}
