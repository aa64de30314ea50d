//! Structured query expressions and their wire encoding.
//!
//! Responsibilities:
//! - Model the PuppetDB AST query language as a recursive value.
//! - Encode any serializable expression to the compact JSON wire form.
//!
//! Does NOT handle:
//! - Validating operators, arity or field names (the server does that).
//! - Escaping for the URL (see [`crate::endpoints::url_encoding`]).
//!
//! Invariants:
//! - Encoding is compact: no whitespace between tokens.
//! - Sequence order is never changed.
//! - Non-finite floats are rejected instead of being written as `null`.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// A node of a query expression.
///
/// ```
/// use puppetdb_client::QueryExpr;
///
/// let query = QueryExpr::or([
///     QueryExpr::eq("certname", "node123"),
///     QueryExpr::eq("certname", "node321"),
/// ]);
/// assert_eq!(
///     query.to_wire().unwrap(),
///     r#"["or",["=","certname","node123"],["=","certname","node321"]]"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<QueryExpr>),
}

impl QueryExpr {
    /// Generic operator node: `[operator, args...]`.
    pub fn op<I, T>(operator: &str, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<QueryExpr>,
    {
        let mut items = vec![QueryExpr::from(operator)];
        items.extend(args.into_iter().map(Into::into));
        QueryExpr::Seq(items)
    }

    fn binary(operator: &str, field: &str, value: impl Into<QueryExpr>) -> Self {
        QueryExpr::Seq(vec![operator.into(), field.into(), value.into()])
    }

    /// `["=", field, value]`
    pub fn eq(field: &str, value: impl Into<QueryExpr>) -> Self {
        Self::binary("=", field, value)
    }

    /// `["~", field, pattern]`
    pub fn regex(field: &str, pattern: &str) -> Self {
        Self::binary("~", field, pattern)
    }

    /// `[">", field, value]`
    pub fn gt(field: &str, value: impl Into<QueryExpr>) -> Self {
        Self::binary(">", field, value)
    }

    /// `["<", field, value]`
    pub fn lt(field: &str, value: impl Into<QueryExpr>) -> Self {
        Self::binary("<", field, value)
    }

    /// `[">=", field, value]`
    pub fn ge(field: &str, value: impl Into<QueryExpr>) -> Self {
        Self::binary(">=", field, value)
    }

    /// `["<=", field, value]`
    pub fn le(field: &str, value: impl Into<QueryExpr>) -> Self {
        Self::binary("<=", field, value)
    }

    /// `["null?", field, is_null]`
    pub fn is_null(field: &str, is_null: bool) -> Self {
        Self::binary("null?", field, is_null)
    }

    /// `["and", clauses...]`
    pub fn and(clauses: impl IntoIterator<Item = QueryExpr>) -> Self {
        Self::op("and", clauses)
    }

    /// `["or", clauses...]`
    pub fn or(clauses: impl IntoIterator<Item = QueryExpr>) -> Self {
        Self::op("or", clauses)
    }

    /// `["not", clause]`
    pub fn not(clause: QueryExpr) -> Self {
        Self::op("not", [clause])
    }

    /// Encode this expression to its wire form.
    pub fn to_wire(&self) -> Result<String> {
        query_to_json(self)
    }
}

impl Serialize for QueryExpr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            QueryExpr::Null => serializer.serialize_unit(),
            QueryExpr::Bool(b) => serializer.serialize_bool(*b),
            QueryExpr::Int(i) => serializer.serialize_i64(*i),
            QueryExpr::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            QueryExpr::Float(f) => Err(S::Error::custom(format!(
                "non-finite number {f} has no JSON representation"
            ))),
            QueryExpr::String(s) => serializer.serialize_str(s),
            QueryExpr::Seq(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for QueryExpr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        QueryExpr::try_from(Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl TryFrom<Value> for QueryExpr {
    type Error = String;

    /// Integers that fit `i64` become `Int`, other finite numbers `Float`.
    /// Objects have no place in the query language.
    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(QueryExpr::Null),
            Value::Bool(b) => Ok(QueryExpr::Bool(b)),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Ok(QueryExpr::Int(i)),
                (None, Some(f)) => Ok(QueryExpr::Float(f)),
                (None, None) => Err(format!("number {n} is out of range")),
            },
            Value::String(s) => Ok(QueryExpr::String(s)),
            Value::Array(items) => items
                .into_iter()
                .map(QueryExpr::try_from)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(QueryExpr::Seq),
            Value::Object(_) => Err("objects are not query expressions".to_string()),
        }
    }
}

impl From<&str> for QueryExpr {
    fn from(value: &str) -> Self {
        QueryExpr::String(value.to_string())
    }
}

impl From<String> for QueryExpr {
    fn from(value: String) -> Self {
        QueryExpr::String(value)
    }
}

impl From<bool> for QueryExpr {
    fn from(value: bool) -> Self {
        QueryExpr::Bool(value)
    }
}

impl From<i64> for QueryExpr {
    fn from(value: i64) -> Self {
        QueryExpr::Int(value)
    }
}

impl From<i32> for QueryExpr {
    fn from(value: i32) -> Self {
        QueryExpr::Int(value.into())
    }
}

impl From<u32> for QueryExpr {
    fn from(value: u32) -> Self {
        QueryExpr::Int(value.into())
    }
}

impl From<f64> for QueryExpr {
    fn from(value: f64) -> Self {
        QueryExpr::Float(value)
    }
}

impl<T: Into<QueryExpr>> From<Vec<T>> for QueryExpr {
    fn from(items: Vec<T>) -> Self {
        QueryExpr::Seq(items.into_iter().map(Into::into).collect())
    }
}

/// Encode a query to the compact JSON text sent as the `query` parameter.
///
/// Accepts any serializable value, so `serde_json::json!` arrays and plain
/// `Vec<&str>` work as well as [`QueryExpr`].
///
/// # Errors
///
/// Returns [`ClientError::Encode`] when the value cannot be represented as
/// JSON (non-finite floats, maps with non-string keys, failing `Serialize` impls).
pub fn query_to_json<T>(query: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(query).map_err(ClientError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_simple_query() {
        let query = vec!["=", "certname", "node123"];
        assert_eq!(query_to_json(&query).unwrap(), r#"["=","certname","node123"]"#);
    }

    #[test]
    fn test_nested_query() {
        let query = json!(["or", ["=", "certname", "node123"], ["=", "certname", "node321"]]);
        assert_eq!(
            query_to_json(&query).unwrap(),
            r#"["or",["=","certname","node123"],["=","certname","node321"]]"#
        );
    }

    #[test]
    fn test_builders_match_raw_form() {
        let built = QueryExpr::and([
            QueryExpr::eq("type", "File"),
            QueryExpr::not(QueryExpr::regex("title", "^/tmp")),
            QueryExpr::ge("line", 10),
            QueryExpr::is_null("file", false),
        ]);
        let raw = json!([
            "and",
            ["=", "type", "File"],
            ["not", ["~", "title", "^/tmp"]],
            [">=", "line", 10],
            ["null?", "file", false]
        ]);
        assert_eq!(built.to_wire().unwrap(), query_to_json(&raw).unwrap());
    }

    #[test]
    fn test_scalar_top_level() {
        assert_eq!(query_to_json("node123").unwrap(), r#""node123""#);
        assert_eq!(QueryExpr::Int(42).to_wire().unwrap(), "42");
        assert_eq!(QueryExpr::Null.to_wire().unwrap(), "null");
        assert_eq!(QueryExpr::Float(1.5).to_wire().unwrap(), "1.5");
    }

    #[test]
    fn test_string_escaping() {
        let query = QueryExpr::eq("message", "say \"hi\"\n");
        assert_eq!(
            query.to_wire().unwrap(),
            r#"["=","message","say \"hi\"\n"]"#
        );
    }

    #[test]
    fn test_non_finite_float_rejected() {
        let query = QueryExpr::gt("value", f64::NAN);
        assert!(matches!(query.to_wire(), Err(ClientError::Encode(_))));

        let query = QueryExpr::lt("value", f64::INFINITY);
        assert!(matches!(query.to_wire(), Err(ClientError::Encode(_))));
    }

    #[test]
    fn test_non_string_map_keys_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(query_to_json(&map), Err(ClientError::Encode(_))));
    }

    #[test]
    fn test_decode_restores_expression() {
        let query = QueryExpr::op(
            "in",
            [
                QueryExpr::from("certname"),
                QueryExpr::op(
                    "extract",
                    [
                        QueryExpr::from("certname"),
                        QueryExpr::op("select_facts", [QueryExpr::eq("name", "osfamily")]),
                    ],
                ),
            ],
        );
        let wire = query.to_wire().unwrap();
        let decoded: QueryExpr = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded, query);
    }

    #[test]
    fn test_decode_numbers() {
        let decoded: QueryExpr = serde_json::from_str(r#"[">","uptime",-3,2.5]"#).unwrap();
        assert_eq!(
            decoded,
            QueryExpr::op(
                ">",
                [QueryExpr::from("uptime"), QueryExpr::Int(-3), QueryExpr::Float(2.5)]
            )
        );

        assert!(serde_json::from_str::<QueryExpr>("1e400").is_err());
        assert!(serde_json::from_str::<QueryExpr>(r#"["=",{"a":1}]"#).is_err());
    }

    #[test]
    fn test_from_vec() {
        let query = QueryExpr::from(vec!["=", "certname", "node123"]);
        assert_eq!(query, QueryExpr::eq("certname", "node123"));
    }
}
