//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON and NDJSON output formats.
//! - Render lists of records and single records from their serde form.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Output always ends with a newline.
//! - An empty list renders as `[]` in JSON and as nothing in NDJSON.
//! - Map keys keep the order the server sent them in.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::error::UsageError;

mod json;
mod ndjson;

pub use json::JsonFormatter;
pub use ndjson::NdjsonFormatter;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Ndjson,
}

impl OutputFormat {
    /// Parse output format from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "ndjson" | "jsonl" => Ok(OutputFormat::Ndjson),
            _ => Err(UsageError::InvalidOutputFormat(s.to_string()).into()),
        }
    }
}

/// Formatter over already-serialized records.
pub trait Formatter {
    fn format_list(&self, items: &[Value]) -> Result<String>;

    fn format_one(&self, item: &Value) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Ndjson => Box::new(NdjsonFormatter),
    }
}

/// Serialize `items` and render them as a list.
pub fn render_list<T: Serialize>(format: OutputFormat, items: &[T]) -> Result<String> {
    let values = items
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    get_formatter(format).format_list(&values)
}

/// Serialize `item` and render it as a single record.
pub fn render_one<T: Serialize>(format: OutputFormat, item: &T) -> Result<String> {
    let value = serde_json::to_value(item)?;
    get_formatter(format).format_one(&value)
}
