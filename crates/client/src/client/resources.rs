//! Catalog resource methods for [`PuppetDbClient`].

use crate::client::PuppetDbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Resource;
use crate::params::ParameterSet;

impl PuppetDbClient {
    /// Resources matching an encoded query.
    pub async fn resources(
        &self,
        query: &str,
        extra: Option<&ParameterSet>,
    ) -> Result<Vec<Resource>> {
        endpoints::query_resources(&self.transport.ctx(), query, extra).await
    }
}
