//! PuppetDB version model.

use serde::{Deserialize, Serialize};

/// Response of the `version` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub version: String,
}
