//! Decoded, natively-typed values.
//!
//! These are what the handlers produce. Maps use `BTreeMap`, so output key
//! order is sorted and independent of input order.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// The text a kept `NULL` attribute decodes to.
pub const NULL_MARKER: &str = "null";

/// The decoded document: normalized attribute name to decoded value.
pub type Document = BTreeMap<String, NativeValue>;

/// A value decoded from a tagged attribute.
///
/// Integers and floats stay distinct: an `N` literal with a decimal point is
/// always a `Float`, even when its fraction is zero.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// A present `NULL` attribute. Serializes as the string `"null"`, not as
    /// JSON `null`, so consumers can tell it apart from an absent attribute.
    NullMarker,
    List(Vec<NativeValue>),
    Map(BTreeMap<String, NativeValue>),
}

impl NativeValue {
    /// Short name of the variant, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::String(_) => "string",
            NativeValue::Integer(_) => "integer",
            NativeValue::Float(_) => "float",
            NativeValue::Bool(_) => "bool",
            NativeValue::NullMarker => "null-marker",
            NativeValue::List(_) => "list",
            NativeValue::Map(_) => "map",
        }
    }
}

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NativeValue::String(s) => serializer.serialize_str(s),
            NativeValue::Integer(n) => serializer.serialize_i64(*n),
            NativeValue::Float(f) => serializer.serialize_f64(*f),
            NativeValue::Bool(b) => serializer.serialize_bool(*b),
            NativeValue::NullMarker => serializer.serialize_str(NULL_MARKER),
            NativeValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            NativeValue::Map(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<NativeValue> for Value {
    fn from(value: NativeValue) -> Self {
        match value {
            NativeValue::String(s) => Value::String(s),
            NativeValue::Integer(n) => Value::Number(n.into()),
            // Handlers never produce non-finite floats; fall back to null like serde_json does.
            NativeValue::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            NativeValue::Bool(b) => Value::Bool(b),
            NativeValue::NullMarker => Value::String(NULL_MARKER.to_string()),
            NativeValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            NativeValue::Map(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
