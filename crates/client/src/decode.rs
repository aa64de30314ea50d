//! Typed response mapping.
//!
//! Responsibilities:
//! - Turn a raw response body into a `serde_json::Value`, tolerating trailing bytes.
//! - Map that value onto typed records with a strict envelope check.
//!
//! Invariants:
//! - `decode_many` only accepts a JSON array and `decode_one` only a JSON object.
//! - One bad element fails the whole call; there is no partial result.
//! - Unknown keys are ignored and missing optional keys take their default.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Read the first JSON value of a body and ignore whatever follows it.
///
/// PuppetDB has been seen appending stray characters after a complete
/// document (for example `{"version":"2.2.0"},`).
pub fn parse_body(body: &[u8]) -> Result<Value> {
    let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(ClientError::Schema(format!("response is not JSON: {e}"))),
        None => Err(ClientError::Schema("response body is empty".to_string())),
    }
}

/// Short label for the JSON kind of `value`, used in error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a JSON array into records.
pub fn decode_many<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>> {
    let Value::Array(items) = raw else {
        return Err(ClientError::Schema(format!(
            "expected a JSON array, got {}",
            json_kind(&raw)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                ClientError::Schema(format!(
                    "element {index} is not a valid {}: {e}",
                    short_type_name::<T>()
                ))
            })
        })
        .collect()
}

/// Decode a JSON object into one record.
pub fn decode_one<T: DeserializeOwned>(raw: Value) -> Result<T> {
    if !raw.is_object() {
        return Err(ClientError::Schema(format!(
            "expected a JSON object, got {}",
            json_kind(&raw)
        )));
    }

    serde_json::from_value(raw).map_err(|e| {
        ClientError::Schema(format!("not a valid {}: {e}", short_type_name::<T>()))
    })
}

/// Last path segment of a type name (`puppetdb_client::models::Node` -> `Node`).
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fact, Node, Version};
    use serde_json::json;

    #[test]
    fn test_decode_many_rejects_object() {
        let raw = json!({"certname": "node123"});
        let err = decode_many::<Node>(raw).unwrap_err();
        match err {
            ClientError::Schema(message) => assert!(message.contains("object")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_many_one_bad_element_fails_all() {
        let raw = json!([{"certname": "ok"}, {"certname": 12}]);
        let err = decode_many::<Node>(raw).unwrap_err();
        assert!(matches!(err, ClientError::Schema(ref m) if m.contains("element 1")));
    }

    #[test]
    fn test_decode_one_rejects_array() {
        let err = decode_one::<Version>(json!([])).unwrap_err();
        assert!(matches!(err, ClientError::Schema(_)));
    }

    #[test]
    fn test_parse_body_ignores_trailing_bytes() {
        let value = parse_body(br#"{ "version" : "2.2.0" },"#).unwrap();
        assert_eq!(value, json!({"version": "2.2.0"}));

        let value = parse_body(b"[1,2]\n]]garbage").unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        assert!(matches!(parse_body(b""), Err(ClientError::Schema(_))));
        assert!(matches!(parse_body(b"   "), Err(ClientError::Schema(_))));
        assert!(matches!(
            parse_body(b"<html>Bad Gateway</html>"),
            Err(ClientError::Schema(_))
        ));
    }

    #[test]
    fn test_fact_values_beyond_f64_decode() {
        let body = br#"[{"certname":"n","name":"big","environment":"production","value":1e400},
            {"certname":"n","name":"wide","environment":"production","value":123456789012345678901234567890}]"#;
        let facts = parse_body(body).and_then(decode_many::<Fact>).unwrap();

        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].value.to_string(), "1e400");
        assert_eq!(facts[1].value.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Node>(), "Node");
        assert_eq!(short_type_name::<Vec<Node>>(), "Vec");
    }
}
