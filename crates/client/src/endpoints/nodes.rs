//! Node inventory endpoints.

use crate::endpoints::request::{PDB_QUERY_PREFIX, RequestContext, build_url, get_many};
use crate::error::Result;
use crate::models::Node;
use crate::params::ParameterSet;

/// List every node known to PuppetDB.
pub async fn list_nodes(ctx: &RequestContext<'_>) -> Result<Vec<Node>> {
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "nodes", &ParameterSet::new());
    get_many(ctx, &url, "nodes").await
}
