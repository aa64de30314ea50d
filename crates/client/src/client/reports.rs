//! Report methods for [`PuppetDbClient`].

use crate::client::PuppetDbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Report;
use crate::params::ParameterSet;

impl PuppetDbClient {
    /// Reports matching an encoded query.
    pub async fn reports(&self, query: &str, extra: Option<&ParameterSet>) -> Result<Vec<Report>> {
        endpoints::query_reports(&self.transport.ctx(), query, extra).await
    }

    /// Reports whose hash equals `hash` (zero or one in practice).
    pub async fn report_by_hash(&self, hash: &str) -> Result<Vec<Report>> {
        endpoints::report_by_hash(&self.transport.ctx(), hash).await
    }
}
