//! Catalog resource endpoints.

use crate::endpoints::request::{PDB_QUERY_PREFIX, RequestContext, build_url, get_many};
use crate::error::Result;
use crate::models::Resource;
use crate::params::{ParameterSet, merge_param};

/// Resources matching an encoded query plus extra parameters.
pub async fn query_resources(
    ctx: &RequestContext<'_>,
    query: &str,
    extra: Option<&ParameterSet>,
) -> Result<Vec<Resource>> {
    let params = merge_param("query", query, extra);
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "resources", &params);
    get_many(ctx, &url, "resources").await
}
