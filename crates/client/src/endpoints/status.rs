//! Puppet Server status-service endpoints.

use serde::de::DeserializeOwned;

use crate::endpoints::request::{RequestContext, STATUS_PREFIX, build_url, get_one};
use crate::error::Result;
use crate::params::ParameterSet;

pub const SERVICE_PROFILER: &str = "puppet-profiler";
pub const SERVICE_JRUBY: &str = "jruby-metrics";
pub const SERVICE_MASTER: &str = "master";
pub const SERVICE_STATUS: &str = "status-service";

/// Fetch one service's status at debug level.
pub async fn get_service_status<T: DeserializeOwned>(
    ctx: &RequestContext<'_>,
    service: &str,
) -> Result<T> {
    let params = ParameterSet::from([("level".to_string(), "debug".to_string())]);
    let url = build_url(ctx.base_url, STATUS_PREFIX, service, &params);
    get_one(ctx, &url, service).await
}
