//! Serde helpers for PuppetDB's loose JSON typing.
//!
//! Responsibilities:
//! - Read identity strings that the service occasionally sends as `null`.
//! - Read optional fields whose JSON type changed between API versions
//!   (e.g. `corrective_change` was a string and is now a boolean).
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (timestamps are kept as strings).
//!
//! Invariants / assumptions:
//! - Optional service fields are `Option<String>`: `null` and missing become
//!   `None`, an empty string stays `Some("")`.
//! - Identity fields (certname, hash, name) are plain `String`; `null` becomes `""`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a string, mapping `null` to the empty string.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional scalar of any JSON type into its text form.
pub fn opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom(
            "expected a string, boolean, number or null",
        )),
    }
}

/// Deserialize a list that the service may send as `null`.
pub fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string_or_null")]
        certname: String,
        #[serde(default, deserialize_with = "opt_string_from_scalar")]
        corrective_change: Option<String>,
        #[serde(default, deserialize_with = "vec_or_null")]
        tags: Vec<String>,
    }

    #[test]
    fn test_string_or_null() {
        let p: Sample = serde_json::from_str(r#"{"certname": null}"#).unwrap();
        assert_eq!(p.certname, "");
        let p: Sample = serde_json::from_str(r#"{"certname": "node123"}"#).unwrap();
        assert_eq!(p.certname, "node123");
        let p: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(p.certname, "");
        assert!(serde_json::from_str::<Sample>(r#"{"certname": 5}"#).is_err());
    }

    #[test]
    fn test_opt_string_from_scalar() {
        let p: Sample = serde_json::from_str(r#"{"corrective_change": true}"#).unwrap();
        assert_eq!(p.corrective_change.as_deref(), Some("true"));
        let p: Sample = serde_json::from_str(r#"{"corrective_change": ""}"#).unwrap();
        assert_eq!(p.corrective_change.as_deref(), Some(""));
        let p: Sample = serde_json::from_str(r#"{"corrective_change": null}"#).unwrap();
        assert_eq!(p.corrective_change, None);
        let p: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(p.corrective_change, None);
        let p: Sample = serde_json::from_str(r#"{"corrective_change": 17}"#).unwrap();
        assert_eq!(p.corrective_change.as_deref(), Some("17"));
        assert!(serde_json::from_str::<Sample>(r#"{"corrective_change": [1]}"#).is_err());
    }

    #[test]
    fn test_vec_or_null() {
        let p: Sample = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(p.tags.is_empty());
        let p: Sample = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert_eq!(p.tags, ["a", "b"]);
    }
}
