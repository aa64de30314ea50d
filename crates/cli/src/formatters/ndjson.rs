//! NDJSON formatter implementation.
//!
//! Responsibilities:
//! - Format records as NDJSON (Newline Delimited JSON), one record per line.
//!
//! Invariants:
//! - Each line is a complete JSON value.
//! - Suitable for streaming into `jq` and log pipelines.

use anyhow::Result;
use serde_json::Value;

use crate::formatters::Formatter;

/// NDJSON formatter.
pub struct NdjsonFormatter;

impl Formatter for NdjsonFormatter {
    fn format_list(&self, items: &[Value]) -> Result<String> {
        let mut output = String::new();
        for item in items {
            let line = serde_json::to_string(item)?;
            output.push_str(&line);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_one(&self, item: &Value) -> Result<String> {
        let line = serde_json::to_string(item)?;
        Ok(line + "\n")
    }
}
