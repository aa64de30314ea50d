//! Centralized constants for the PuppetDB client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "PUPPETDB_URL";
pub const ENV_MASTER_URL: &str = "PUPPETDB_MASTER_URL";
pub const ENV_CERT: &str = "PUPPETDB_CERT";
pub const ENV_KEY: &str = "PUPPETDB_KEY";
pub const ENV_CA: &str = "PUPPETDB_CA";
pub const ENV_SKIP_VERIFY: &str = "PUPPETDB_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "PUPPETDB_TIMEOUT";
pub const ENV_VERBOSE: &str = "PUPPETDB_VERBOSE";
