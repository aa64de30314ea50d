//! Event and event-count endpoints.

use crate::endpoints::request::{PDB_QUERY_PREFIX, RequestContext, build_url, get_many};
use crate::error::Result;
use crate::models::{Event, EventCount};
use crate::params::{ParameterSet, merge_param};

/// Resource events matching an encoded query plus extra parameters.
pub async fn query_events(
    ctx: &RequestContext<'_>,
    query: &str,
    extra: Option<&ParameterSet>,
) -> Result<Vec<Event>> {
    let params = merge_param("query", query, extra);
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "events", &params);
    get_many(ctx, &url, "events").await
}

/// Event counts aggregated by `summarize_by` (`certname`, `resource`, `containing_class`).
///
/// A `summarize_by` entry in `extra` takes precedence over the argument.
pub async fn event_counts(
    ctx: &RequestContext<'_>,
    query: &str,
    summarize_by: &str,
    extra: Option<&ParameterSet>,
) -> Result<Vec<EventCount>> {
    let params = merge_param("query", query, extra);
    let params = merge_param("summarize_by", summarize_by, Some(&params));
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "event-counts", &params);
    get_many(ctx, &url, "event-counts").await
}
