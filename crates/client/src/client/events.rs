//! Event methods for [`PuppetDbClient`].

use crate::client::PuppetDbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Event, EventCount};
use crate::params::ParameterSet;

impl PuppetDbClient {
    /// Resource events matching an encoded query.
    pub async fn events(&self, query: &str, extra: Option<&ParameterSet>) -> Result<Vec<Event>> {
        endpoints::query_events(&self.transport.ctx(), query, extra).await
    }

    /// Event counts matching an encoded query, grouped by `summarize_by`.
    pub async fn event_counts(
        &self,
        query: &str,
        summarize_by: &str,
        extra: Option<&ParameterSet>,
    ) -> Result<Vec<EventCount>> {
        endpoints::event_counts(&self.transport.ctx(), query, summarize_by, extra).await
    }
}
