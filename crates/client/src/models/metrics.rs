//! PuppetDB metric (mbean) models.

use serde::{Deserialize, Serialize};

/// Population gauge exposed as `{"Value": ...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MbeanValue {
    #[serde(rename = "Value")]
    pub value: f64,
}

/// Average resources per node.
pub const MBEAN_AVG_RESOURCES_PER_NODE: &str =
    "com.puppetlabs.puppetdb.query.population:type=default,name=avg-resources-per-node";

/// Total resources across all nodes.
pub const MBEAN_NUM_RESOURCES: &str =
    "com.puppetlabs.puppetdb.query.population:type=default,name=num-resources";

/// Number of active nodes.
pub const MBEAN_NUM_NODES: &str =
    "com.puppetlabs.puppetdb.query.population:type=default,name=num-nodes";
