//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format records as pretty-printed JSON.

use anyhow::Result;
use serde_json::Value;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_list(&self, items: &[Value]) -> Result<String> {
        Ok(serde_json::to_string_pretty(items)? + "\n")
    }

    fn format_one(&self, item: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(item)? + "\n")
    }
}
