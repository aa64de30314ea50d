//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define connection settings for PuppetDB and the optional Puppet Server.
//! - Define the TLS material (client certificate, key, CA bundle) as file paths.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Reading or parsing the PEM files (see the client crate builder).

mod connection;
mod tls;

pub use connection::{Config, ConnectionConfig};
pub use tls::TlsConfig;
