//! Report endpoints.

use crate::endpoints::request::{PDB_QUERY_PREFIX, RequestContext, build_url, get_many};
use crate::error::Result;
use crate::models::Report;
use crate::params::{ParameterSet, merge_param};
use crate::query::QueryExpr;

/// Reports matching an encoded query plus extra parameters.
pub async fn query_reports(
    ctx: &RequestContext<'_>,
    query: &str,
    extra: Option<&ParameterSet>,
) -> Result<Vec<Report>> {
    let params = merge_param("query", query, extra);
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "reports", &params);
    get_many(ctx, &url, "reports").await
}

/// The report(s) with the given hash.
pub async fn report_by_hash(ctx: &RequestContext<'_>, hash: &str) -> Result<Vec<Report>> {
    let query = QueryExpr::eq("hash", hash).to_wire()?;
    query_reports(ctx, &query, None).await
}
