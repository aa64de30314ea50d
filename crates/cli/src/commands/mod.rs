//! CLI command implementations.
//!
//! Responsibilities:
//! - Build the PuppetDB and Puppet Server clients from the loaded configuration.
//! - Turn `--query` / `--certname` / `--param` into the client's query inputs.
//! - Print rendered records to stdout.

pub mod certs;
pub mod events;
pub mod facts;
pub mod master;
pub mod metrics;
pub mod nodes;
pub mod reports;
pub mod resources;
pub mod version;

use anyhow::Result;
use puppetdb_client::{
    MasterClient, MetricsCollector, ParameterSet, PuppetDbClient, QueryExpr, query_to_json,
};
use puppetdb_config::Config;
use serde::Serialize;
use serde_json::Value;

use crate::args::QueryArgs;
use crate::error::UsageError;
use crate::formatters::{OutputFormat, render_list, render_one};

/// Everything a command needs besides its own arguments.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    /// Record request metrics (set when `--metrics-bind` installed an exporter).
    pub metrics: bool,
}

impl CommandContext {
    pub fn puppetdb(&self) -> Result<PuppetDbClient> {
        let mut builder = PuppetDbClient::builder().from_config(&self.config);
        if self.metrics {
            builder = builder.metrics(MetricsCollector::new());
        }
        Ok(builder.build()?)
    }

    pub fn master(&self) -> Result<MasterClient> {
        if self.config.master_url.is_none() {
            return Err(UsageError::MissingMasterUrl.into());
        }
        let mut builder = MasterClient::builder().from_config(&self.config);
        if self.metrics {
            builder = builder.metrics(MetricsCollector::new());
        }
        Ok(builder.build()?)
    }

    pub fn print_list<T: Serialize>(&self, items: &[T]) -> Result<()> {
        print!("{}", render_list(self.format, items)?);
        Ok(())
    }

    pub fn print_one<T: Serialize>(&self, item: &T) -> Result<()> {
        print!("{}", render_one(self.format, item)?);
        Ok(())
    }
}

impl QueryArgs {
    /// The encoded query, or an empty string to send no `query` parameter.
    pub fn encoded_query(&self) -> Result<String> {
        if let Some(text) = &self.query {
            return Ok(encode_query_text(text)?);
        }
        if let Some(certname) = &self.certname {
            return Ok(QueryExpr::eq("certname", certname.as_str()).to_wire()?);
        }
        Ok(String::new())
    }

    /// Extra parameters, or `None` when no `--param` was given.
    pub fn extra(&self) -> Option<ParameterSet> {
        if self.params.is_empty() {
            return None;
        }
        Some(self.params.iter().cloned().collect())
    }
}

/// Parse user-supplied query JSON and re-encode it compactly.
pub fn encode_query_text(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text).map_err(UsageError::InvalidQuery)?;
    Ok(query_to_json(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExitCode, ExitCodeExt};

    #[test]
    fn test_encode_query_text_compacts() {
        let encoded = encode_query_text(r#"[ "=", "certname",   "node123" ]"#).unwrap();
        assert_eq!(encoded, r#"["=","certname","node123"]"#);
    }

    #[test]
    fn test_encode_query_text_rejects_garbage() {
        let err = encode_query_text("[\"=\", \"certname\"").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::UsageError);
    }

    #[test]
    fn test_certname_shortcut() {
        let args = QueryArgs {
            certname: Some("web01".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.encoded_query().unwrap(),
            r#"["=","certname","web01"]"#
        );
    }

    #[test]
    fn test_no_query_is_empty() {
        let args = QueryArgs::default();
        assert_eq!(args.encoded_query().unwrap(), "");
        assert!(args.extra().is_none());
    }

    #[test]
    fn test_extra_params() {
        let args = QueryArgs {
            params: vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "5".to_string()),
            ],
            ..Default::default()
        };
        let extra = args.extra().unwrap();
        assert_eq!(extra.get("limit").map(String::as_str), Some("10"));
        assert_eq!(extra.get("offset").map(String::as_str), Some("5"));
    }
}
