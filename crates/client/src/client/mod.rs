//! PuppetDB and Puppet Server API clients.
//!
//! This module provides [`PuppetDbClient`] for the PuppetDB v4 query API and
//! [`MasterClient`] for the Puppet Server status and certificate-authority APIs.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `nodes`, `facts`, `events`, `reports`, `resources`, `server`: PuppetDB methods
//! - `master`, `certificates`: Puppet Server methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Query expression encoding (see [`crate::query`])
//!
//! # Invariants
//! - Clients hold no mutable state; every method is a single round trip
//! - Clients are `Send + Sync` and can be shared behind an `Arc`

pub mod builder;

mod certificates;
mod events;
mod facts;
mod master;
mod nodes;
mod reports;
mod resources;
mod server;

use std::sync::Arc;
use std::time::Duration;

use crate::endpoints::RequestContext;
use crate::logging::RequestLogger;
use crate::metrics::MetricsCollector;

/// HTTP client plus the per-request collaborators, shared by both clients.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) logger: Arc<dyn RequestLogger>,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl Transport {
    fn ctx(&self) -> RequestContext<'_> {
        RequestContext {
            http: &self.http,
            base_url: &self.base_url,
            timeout: self.timeout,
            logger: self.logger.as_ref(),
            metrics: self.metrics.as_ref(),
        }
    }
}

/// PuppetDB query API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use puppetdb_client::{PuppetDbClient, QueryExpr};
///
/// let client = PuppetDbClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .build()?;
///
/// let query = QueryExpr::eq("certname", "node123").to_wire()?;
/// let facts = client.facts(&query, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PuppetDbClient {
    pub(crate) transport: Transport,
}

impl PuppetDbClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PuppetDbClientBuilder {
        builder::PuppetDbClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }
}

/// Puppet Server client (status services and certificate authority).
#[derive(Debug, Clone)]
pub struct MasterClient {
    pub(crate) transport: Transport,
}

impl MasterClient {
    /// Create a new client builder.
    pub fn builder() -> builder::MasterClientBuilder {
        builder::MasterClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }
}
