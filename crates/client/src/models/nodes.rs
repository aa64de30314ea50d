//! Node inventory models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_string_from_scalar, string_or_null};

/// One node from the `nodes` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    #[serde(deserialize_with = "string_or_null")]
    pub certname: String,
    /// Deactivation timestamp, `None` for active nodes.
    pub deactivated: Option<String>,
    /// Expiration timestamp, `None` unless node-ttl expired the node.
    pub expired: Option<String>,
    pub catalog_timestamp: Option<String>,
    pub facts_timestamp: Option<String>,
    pub report_timestamp: Option<String>,
    pub catalog_environment: Option<String>,
    pub facts_environment: Option<String>,
    pub report_environment: Option<String>,
    pub latest_report_hash: Option<String>,
    pub latest_report_status: Option<String>,
    pub latest_report_job_id: Option<String>,
    pub cached_catalog_status: Option<String>,
    #[serde(deserialize_with = "opt_string_from_scalar")]
    pub latest_report_corrective_change: Option<String>,
    pub latest_report_noop: Option<bool>,
    pub latest_report_noop_pending: Option<bool>,
}

impl Node {
    /// Whether the node is neither deactivated nor expired.
    pub fn is_active(&self) -> bool {
        self.deactivated.is_none() && self.expired.is_none()
    }
}
