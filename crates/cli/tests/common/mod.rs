//! Shared test utilities for `pdb` integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear `PUPPETDB_*` variables so the host environment cannot leak in.

#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a hermetic `pdb` command for integration testing.
pub fn pdb_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pdb");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("PUPPETDB_URL")
        .env_remove("PUPPETDB_MASTER_URL")
        .env_remove("PUPPETDB_CERT")
        .env_remove("PUPPETDB_KEY")
        .env_remove("PUPPETDB_CA")
        .env_remove("PUPPETDB_SKIP_VERIFY")
        .env_remove("PUPPETDB_TIMEOUT")
        .env_remove("PUPPETDB_VERBOSE")
        .env_remove("PUPPETDB_OTLP_ENDPOINT")
        .env_remove("PUPPETDB_METRICS_BIND")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `pdb` command pointed at `base_url` for PuppetDB.
pub fn pdb_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = pdb_cmd();
    cmd.env("PUPPETDB_URL", base_url);
    cmd
}

/// Returns a hermetic `pdb` command pointed at `base_url` for Puppet Server.
pub fn pdb_cmd_with_master(base_url: &str) -> Command {
    let mut cmd = pdb_cmd();
    cmd.env("PUPPETDB_MASTER_URL", base_url);
    cmd
}

/// Matches the error text printed for an unreachable server.
pub fn connection_error_predicate() -> impl Predicate<str> {
    predicate::str::contains("Connection refused")
        .or(predicate::str::contains("timed out"))
        .or(predicate::str::contains("HTTP error"))
}
