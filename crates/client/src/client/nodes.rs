//! Node inventory methods for [`PuppetDbClient`].

use crate::client::PuppetDbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Node;

impl PuppetDbClient {
    /// List every node known to PuppetDB.
    pub async fn nodes(&self) -> Result<Vec<Node>> {
        endpoints::list_nodes(&self.transport.ctx()).await
    }
}
