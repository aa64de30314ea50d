//! Configuration management for the PuppetDB client workspace.
//!
//! This crate provides types and loaders for PuppetDB and Puppet Server
//! connection settings sourced from `.env` files, environment variables,
//! and programmatic overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, TlsConfig};
