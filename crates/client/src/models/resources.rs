//! Catalog resource models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{string_or_null, vec_or_null};
use crate::value::PolymorphicValue;

/// One resource from a node's most recent catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "string_or_null")]
    pub certname: String,
    /// Resource hash identifying the resource across nodes.
    pub resource: Option<String>,
    #[serde(rename = "type", deserialize_with = "string_or_null")]
    pub type_: String,
    #[serde(deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(deserialize_with = "vec_or_null")]
    pub tags: Vec<String>,
    pub exported: bool,
    pub file: Option<String>,
    pub line: Option<u64>,
    pub environment: Option<String>,
    /// Resource parameters; a mapping whose values may be of any JSON type.
    #[serde(skip_serializing_if = "PolymorphicValue::is_absent")]
    pub parameters: PolymorphicValue,
}

impl Resource {
    /// Reference in Puppet syntax, e.g. `File[/etc/motd]`.
    pub fn reference(&self) -> String {
        format!("{}[{}]", self.type_, self.title)
    }
}
