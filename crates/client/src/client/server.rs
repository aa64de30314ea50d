//! Server metrics and version methods for [`PuppetDbClient`].
//!
//! # What this module handles:
//! - Reading arbitrary mbeans
//! - The three population gauges PuppetDB exposes
//! - The server version
//!
//! # What this module does NOT handle:
//! - Puppet Server status services (see [`crate::client::MasterClient`])

use serde::de::DeserializeOwned;

use crate::client::PuppetDbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    MBEAN_AVG_RESOURCES_PER_NODE, MBEAN_NUM_NODES, MBEAN_NUM_RESOURCES, MbeanValue, Version,
};

impl PuppetDbClient {
    /// Read the mbean `mbean` and decode it as `T`.
    pub async fn metric<T: DeserializeOwned>(&self, mbean: &str) -> Result<T> {
        endpoints::get_mbean(&self.transport.ctx(), mbean).await
    }

    /// Average number of resources per node.
    pub async fn metric_resources_per_node(&self) -> Result<f64> {
        self.population(MBEAN_AVG_RESOURCES_PER_NODE).await
    }

    /// Number of resources across all nodes.
    pub async fn metric_num_resources(&self) -> Result<f64> {
        self.population(MBEAN_NUM_RESOURCES).await
    }

    /// Number of active nodes.
    pub async fn metric_num_nodes(&self) -> Result<f64> {
        self.population(MBEAN_NUM_NODES).await
    }

    /// The PuppetDB server version.
    pub async fn version(&self) -> Result<Version> {
        endpoints::get_version(&self.transport.ctx()).await
    }

    async fn population(&self, mbean: &str) -> Result<f64> {
        let value: MbeanValue = self.metric(mbean).await?;
        Ok(value.value)
    }
}
