//! Fact models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_or_null;
use crate::value::PolymorphicValue;

/// One fact of one node.
///
/// The value keeps whatever JSON shape the node reported; use the checked
/// accessors on [`PolymorphicValue`] to read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fact {
    #[serde(deserialize_with = "string_or_null")]
    pub certname: String,
    #[serde(deserialize_with = "string_or_null")]
    pub name: String,
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "PolymorphicValue::is_absent")]
    pub value: PolymorphicValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_structured_fact_value() {
        let fact: Fact = serde_json::from_str(
            r#"{"certname": "node123", "name": "os", "environment": "production",
                "value": {"family": "RedHat", "release": {"major": "8"}}}"#,
        )
        .unwrap();
        assert_eq!(fact.value.kind(), ValueKind::Mapping);
        let major = fact.value.get("release").and_then(|r| r.get("major"));
        assert_eq!(major.unwrap().as_str().unwrap(), "8");
    }

    #[test]
    fn test_missing_value_is_absent_and_not_serialized() {
        let fact: Fact = serde_json::from_str(r#"{"certname": "n", "name": "x"}"#).unwrap();
        assert!(fact.value.is_absent());
        let json = serde_json::to_value(&fact).unwrap();
        assert!(json.get("value").is_none());
    }
}
