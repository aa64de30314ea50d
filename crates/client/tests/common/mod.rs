//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the PuppetDB client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at a `wiremock` server and never at a real service
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::collections::HashMap;

// Re-export test utilities from puppetdb-client
#[allow(unused_imports)]
pub use puppetdb_client::testing::{RecordingLogger, load_fixture, load_fixture_text};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use puppetdb_client::{ClientError, MasterClient, ParameterSet, PuppetDbClient, QueryExpr};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// PuppetDB client aimed at the mock server.
#[allow(dead_code)]
pub fn pdb_client(server: &MockServer) -> PuppetDbClient {
    PuppetDbClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Puppet Server client aimed at the mock server.
#[allow(dead_code)]
pub fn master_client(server: &MockServer) -> MasterClient {
    MasterClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Build a parameter set from string pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> ParameterSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Decoded query pairs of the only request the server received.
#[allow(dead_code)]
pub async fn received_query(server: &MockServer) -> HashMap<String, String> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query_pairs().into_owned().collect()
}
