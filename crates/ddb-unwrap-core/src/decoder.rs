//! Tag dispatch and whole-document conversion.
//!
//! [`decode`] is the single dispatch point for all nesting levels: top-level
//! attributes, list elements and map fields all go through it, and the `L`
//! and `M` handlers recurse back into it via [`decode_entry`].
//!
//! Depth is bounded by serde_json's parser recursion limit, so the recursion
//! here cannot outgrow the input that reached it.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{DecodeError, Result};
use crate::handlers;
use crate::tag::Tag;
use crate::types::{Document, NativeValue};

/// Convert a typed-attribute JSON string into a compact plain-JSON string.
///
/// The output is one line with no trailing newline. Map keys are sorted.
///
/// # Errors
/// Returns `DecodeError::JsonParse` if `json` is not valid JSON, and
/// `DecodeError::NotAnObject` if its root is not an object. Malformed
/// attributes are dropped and never cause an error.
///
/// # Examples
///
/// ```
/// use ddb_unwrap_core::convert_str;
///
/// let out = convert_str(r#"{"when":{"S":"2023-01-01T00:00:00Z"},"gone":{"NULL":"false"}}"#).unwrap();
/// assert_eq!(out, r#"{"when":1672531200}"#);
/// ```
pub fn convert_str(json: &str) -> Result<String> {
    let root: Value = serde_json::from_str(json)?;
    trace!(bytes = json.len(), "parsed input document");
    let document = convert(&root)?;
    serde_json::to_string(&document).map_err(|e| DecodeError::Serialize(e.to_string()))
}

/// Convert an already-parsed typed-attribute document.
///
/// Attribute names are trimmed, and names that are empty after trimming are
/// skipped. When two names trim to the same key, the later one in input
/// order wins.
pub fn convert(root: &Value) -> Result<Document> {
    let attributes = root.as_object().ok_or(DecodeError::NotAnObject {
        found: json_kind(root),
    })?;

    let mut document = Document::new();
    for (name, entry) in attributes {
        let key = name.trim();
        if key.is_empty() {
            debug!(name = name.as_str(), "skipping attribute with empty name");
            continue;
        }
        match decode_entry(entry) {
            Some(value) => {
                trace!(attribute = key, kind = value.kind(), "kept attribute");
                document.insert(key.to_string(), value);
            }
            None => debug!(attribute = key, "dropping attribute"),
        }
    }

    debug!(
        attributes = attributes.len(),
        kept = document.len(),
        "converted document"
    );
    Ok(document)
}

/// Decode one tagged entry of the form `{"<tag>": <raw>}`.
///
/// Anything that is not an object with exactly one key is dropped. An entry
/// carrying several tags is dropped whole; none of its recognized tags are
/// decoded, so the result never depends on key order.
pub fn decode_entry(entry: &Value) -> Option<NativeValue> {
    let object = entry.as_object()?;
    if object.len() != 1 {
        debug!(keys = object.len(), "dropping entry without exactly one tag");
        return None;
    }
    let (tag, raw) = object.iter().next()?;
    decode(tag, raw)
}

/// Decode `raw` according to `tag`.
///
/// The tag is trimmed and must then match one of the six recognized tags
/// exactly. Returns `None` for an unknown tag, a payload of the wrong JSON
/// shape, or a payload that fails the tag's validation.
///
/// # Examples
///
/// ```
/// use ddb_unwrap_core::{decode, NativeValue};
/// use serde_json::json;
///
/// assert_eq!(decode("N", &json!("3.5")), Some(NativeValue::Float(3.5)));
/// assert_eq!(decode(" BOOL ", &json!("T")), Some(NativeValue::Bool(true)));
/// assert_eq!(decode("X", &json!("1")), None);
/// ```
pub fn decode(tag: &str, raw: &Value) -> Option<NativeValue> {
    let Some(tag) = Tag::parse(tag) else {
        debug!(tag, "unrecognized tag");
        return None;
    };
    match tag {
        Tag::S => handlers::string(raw),
        Tag::N => handlers::number(raw),
        Tag::Bool => handlers::boolean(raw),
        Tag::Null => handlers::null(raw),
        Tag::L => handlers::list(raw),
        Tag::M => handlers::map(raw),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
