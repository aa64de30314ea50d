//! Fact endpoints.

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{PDB_QUERY_PREFIX, RequestContext, build_url, get_many};
use crate::error::Result;
use crate::models::Fact;
use crate::params::{ParameterSet, merge_param};

/// List the names of all facts known to PuppetDB.
pub async fn list_fact_names(ctx: &RequestContext<'_>) -> Result<Vec<String>> {
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "fact-names", &ParameterSet::new());
    get_many(ctx, &url, "fact-names").await
}

/// All facts of one node.
pub async fn node_facts(ctx: &RequestContext<'_>, certname: &str) -> Result<Vec<Fact>> {
    let endpoint = format!("nodes/{}/facts", encode_path_segment(certname));
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, &endpoint, &ParameterSet::new());
    get_many(ctx, &url, "nodes/facts").await
}

/// One fact across all nodes.
pub async fn fact_per_node(ctx: &RequestContext<'_>, fact_name: &str) -> Result<Vec<Fact>> {
    let endpoint = format!("facts/{}", encode_path_segment(fact_name));
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, &endpoint, &ParameterSet::new());
    get_many(ctx, &url, "facts/name").await
}

/// Facts matching an encoded query plus extra parameters.
pub async fn query_facts(
    ctx: &RequestContext<'_>,
    query: &str,
    extra: Option<&ParameterSet>,
) -> Result<Vec<Fact>> {
    let params = merge_param("query", query, extra);
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "facts", &params);
    get_many(ctx, &url, "facts").await
}
