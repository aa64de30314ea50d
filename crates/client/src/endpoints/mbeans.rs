//! PuppetDB metrics (mbean) and version endpoints.

use serde::de::DeserializeOwned;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{PDB_QUERY_PREFIX, RequestContext, build_url, get_one};
use crate::error::Result;
use crate::models::Version;
use crate::params::ParameterSet;

/// Read one mbean and decode it as `T`.
pub async fn get_mbean<T: DeserializeOwned>(ctx: &RequestContext<'_>, mbean: &str) -> Result<T> {
    let endpoint = format!("metrics/mbean/{}", encode_path_segment(mbean));
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, &endpoint, &ParameterSet::new());
    get_one(ctx, &url, "metrics/mbean").await
}

/// The PuppetDB server version.
pub async fn get_version(ctx: &RequestContext<'_>) -> Result<Version> {
    let url = build_url(ctx.base_url, PDB_QUERY_PREFIX, "version", &ParameterSet::new());
    get_one(ctx, &url, "version").await
}
