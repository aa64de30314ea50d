//! Polymorphic JSON values.
//!
//! Responsibilities:
//! - Represent a JSON field whose type is not fixed by the service schema
//!   (a fact value, an event's old/new value).
//! - Checked extraction that reports the expected and actual kind on mismatch.
//! - Faithful re-encoding of what was decoded.
//!
//! Does NOT handle:
//! - Coercion between kinds (a numeric string is never read as a number).
//!
//! Invariants:
//! - Decoding never fails: every JSON value maps to a variant.
//! - Mappings keep the key order seen on the wire (`preserve_order`).
//! - Numbers keep their source text (`arbitrary_precision`): `1e400` and
//!   integers wider than 64 bits re-encode exactly as received.
//! - `Absent` is only produced by `Default` (a missing field) and encodes as `null`.

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;
use thiserror::Error;

/// The kind of a [`PolymorphicValue`], used in mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Absent,
    Null,
    Boolean,
    Number,
    /// A number that fits the requested integer type. Only appears as an expectation.
    Integer,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Returns the string label for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Absent => "absent",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extraction on a [`PolymorphicValue`] of the wrong kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// A JSON value whose shape is only known at runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PolymorphicValue {
    /// The field was missing from the payload.
    #[default]
    Absent,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<PolymorphicValue>),
    Mapping(Vec<(String, PolymorphicValue)>),
}

impl PolymorphicValue {
    /// The kind of the stored variant.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn mismatch(&self, expected: ValueKind) -> TypeMismatch {
        TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn as_number(&self) -> Result<&Number, TypeMismatch> {
        match self {
            Self::Number(n) => Ok(n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    pub fn as_f64(&self) -> Result<f64, TypeMismatch> {
        self.as_number()?
            .as_f64()
            .ok_or_else(|| self.mismatch(ValueKind::Number))
    }

    /// Extract a signed integer. Fractional or out-of-range numbers mismatch.
    pub fn as_i64(&self) -> Result<i64, TypeMismatch> {
        self.as_number()
            .map_err(|_| self.mismatch(ValueKind::Integer))?
            .as_i64()
            .ok_or_else(|| self.mismatch(ValueKind::Integer))
    }

    /// Extract an unsigned integer. Negative or fractional numbers mismatch.
    pub fn as_u64(&self) -> Result<u64, TypeMismatch> {
        self.as_number()
            .map_err(|_| self.mismatch(ValueKind::Integer))?
            .as_u64()
            .ok_or_else(|| self.mismatch(ValueKind::Integer))
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    pub fn as_sequence(&self) -> Result<&[PolymorphicValue], TypeMismatch> {
        match self {
            Self::Sequence(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Sequence)),
        }
    }

    pub fn as_mapping(&self) -> Result<&[(String, PolymorphicValue)], TypeMismatch> {
        match self {
            Self::Mapping(entries) => Ok(entries),
            other => Err(other.mismatch(ValueKind::Mapping)),
        }
    }

    /// Look up a key when this is a mapping.
    pub fn get(&self, key: &str) -> Option<&PolymorphicValue> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Look up a position when this is a sequence.
    pub fn get_index(&self, index: usize) -> Option<&PolymorphicValue> {
        match self {
            Self::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    /// Re-encode as a `serde_json::Value`, keeping mapping order.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Absent | Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Mapping(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for PolymorphicValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for PolymorphicValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for PolymorphicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PolymorphicValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl Serialize for PolymorphicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PolymorphicValue {
    /// Reads through `serde_json::Value`. With `arbitrary_precision` a number
    /// keeps its source text, so wide integers and out-of-range exponents decode.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for PolymorphicValue {
    /// Compact JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
