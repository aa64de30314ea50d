//! Fact methods for [`PuppetDbClient`].

use crate::client::PuppetDbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Fact;
use crate::params::ParameterSet;

impl PuppetDbClient {
    /// Names of all facts known to PuppetDB.
    pub async fn fact_names(&self) -> Result<Vec<String>> {
        endpoints::list_fact_names(&self.transport.ctx()).await
    }

    /// All facts of the node `certname`.
    pub async fn node_facts(&self, certname: &str) -> Result<Vec<Fact>> {
        endpoints::node_facts(&self.transport.ctx(), certname).await
    }

    /// The fact `name` on every node that has it.
    pub async fn fact_per_node(&self, name: &str) -> Result<Vec<Fact>> {
        endpoints::fact_per_node(&self.transport.ctx(), name).await
    }

    /// Facts matching an encoded query.
    ///
    /// An empty `query` sends no `query` parameter. Entries in `extra` are added
    /// as-is and win over `query` on collision.
    pub async fn facts(&self, query: &str, extra: Option<&ParameterSet>) -> Result<Vec<Fact>> {
        endpoints::query_facts(&self.transport.ctx(), query, extra).await
    }
}
