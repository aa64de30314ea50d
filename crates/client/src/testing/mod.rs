//! Testing utilities for PuppetDB client tests.
//!
//! This module provides helper functions for loading test fixtures, a request
//! logger that records attempts, and proptest strategies for query expressions.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use puppetdb_client::testing::{load_fixture, RecordingLogger};
//!
//! let fixture = load_fixture("nodes/list_nodes.json");
//! let logger = std::sync::Arc::new(RecordingLogger::default());
//! ```

use std::path::Path;
use std::sync::Mutex;

use proptest::prelude::*;

use crate::logging::{RequestAttempt, RequestLogger};
use crate::query::QueryExpr;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "nodes/list_nodes.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let content = load_fixture_text(fixture_path);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim, for bodies that are deliberately not clean JSON.
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture_text(fixture_path: &str) -> String {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// Request logger that keeps every attempt as `"METHOD url"`.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    attempts: Mutex<Vec<String>>,
}

impl RecordingLogger {
    /// Attempts recorded so far, oldest first.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().expect("logger mutex poisoned").clone()
    }
}

impl RequestLogger for RecordingLogger {
    fn record_attempt(&self, attempt: &RequestAttempt<'_>) {
        self.attempts
            .lock()
            .expect("logger mutex poisoned")
            .push(format!("{} {}", attempt.method, attempt.url));
    }
}

/// Scalar query leaves. Floats are quarter steps so they survive a JSON round trip exactly.
pub fn scalar_expr() -> impl Strategy<Value = QueryExpr> {
    prop_oneof![
        Just(QueryExpr::Null),
        any::<bool>().prop_map(QueryExpr::Bool),
        any::<i64>().prop_map(QueryExpr::Int),
        (-4_000_000i32..4_000_000).prop_map(|n| QueryExpr::Float(f64::from(n) / 4.0 + 0.25)),
        "[ -~]{0,16}".prop_map(QueryExpr::String),
        "\\PC{0,8}".prop_map(QueryExpr::String),
    ]
}

/// Arbitrary nested query expressions, operator-led or not.
pub fn query_expr() -> impl Strategy<Value = QueryExpr> {
    scalar_expr().prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(QueryExpr::Seq)
    })
}

/// Operator-led clauses like `["=", "certname", "node123"]`.
pub fn clause_expr() -> impl Strategy<Value = QueryExpr> {
    (
        prop::sample::select(vec!["=", "~", ">", "<", ">=", "<="]),
        "[a-z_]{1,12}",
        scalar_expr(),
    )
        .prop_map(|(op, field, value)| QueryExpr::op(op, [QueryExpr::from(field), value]))
}
