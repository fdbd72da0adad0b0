//! Per-tag handlers.
//!
//! Each handler takes the raw payload of one tagged entry and returns
//! `Some(value)` when the payload is valid for its tag, `None` when the entry
//! must be dropped. A payload of the wrong JSON shape (e.g. an `S` whose
//! payload is a number) is a plain `None`; nothing here panics on bad input.
//!
//! Scalar payloads are trimmed of surrounding whitespace before validation.

use std::collections::BTreeMap;

use chrono::{DateTime, Timelike};
use serde_json::Value;
use tracing::debug;

use crate::decoder::decode_entry;
use crate::types::NativeValue;

/// Tokens accepted as `true` by `BOOL` and `NULL`.
pub const TRUTHY: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];

/// Tokens accepted as `false` by `BOOL`.
pub const FALSY: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// `S`: trimmed string, or epoch seconds when it is an RFC 3339 timestamp.
///
/// Empty strings (after trimming) are dropped. A string shaped like a
/// timestamp but with impossible components (month 13, hour 25, ...) is
/// dropped as well rather than passed through as text, and so is a
/// seconds field of `60` (chrono's leap-second form).
pub fn string(raw: &Value) -> Option<NativeValue> {
    let s = raw.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    if !looks_like_rfc3339(s) {
        return Some(NativeValue::String(s.to_string()));
    }
    match DateTime::parse_from_rfc3339(s) {
        Ok(ts) if ts.nanosecond() >= 1_000_000_000 => {
            debug!(value = s, "dropping leap-second timestamp");
            None
        }
        Ok(ts) => Some(NativeValue::Integer(ts.timestamp())),
        Err(err) => {
            debug!(value = s, error = %err, "dropping malformed timestamp");
            None
        }
    }
}

/// `N`: `[+-]?digits(.digits)?`, anchored at both ends.
///
/// A literal with a decimal point becomes a `Float`, anything else an
/// `Integer`. Literals that overflow `i64`, or overflow `f64` to infinity,
/// are dropped.
pub fn number(raw: &Value) -> Option<NativeValue> {
    let s = raw.as_str()?.trim();
    if !is_decimal_literal(s) {
        return None;
    }
    if s.contains('.') {
        let f: f64 = s.parse().ok()?;
        f.is_finite().then_some(NativeValue::Float(f))
    } else {
        match s.parse::<i64>() {
            Ok(n) => Some(NativeValue::Integer(n)),
            Err(err) => {
                debug!(value = s, error = %err, "dropping out-of-range integer");
                None
            }
        }
    }
}

/// `BOOL`: one of [`TRUTHY`] or [`FALSY`].
pub fn boolean(raw: &Value) -> Option<NativeValue> {
    let s = raw.as_str()?.trim();
    if TRUTHY.contains(&s) {
        Some(NativeValue::Bool(true))
    } else if FALSY.contains(&s) {
        Some(NativeValue::Bool(false))
    } else {
        None
    }
}

/// `NULL`: kept as [`NativeValue::NullMarker`] only for a truthy token.
///
/// `NULL: false` is dropped, the same as an unparseable token.
pub fn null(raw: &Value) -> Option<NativeValue> {
    let s = raw.as_str()?.trim();
    TRUTHY.contains(&s).then_some(NativeValue::NullMarker)
}

/// `L`: an array of tagged entries.
///
/// Entries that do not decode are skipped; survivors keep their relative
/// order. A list with no survivors is itself dropped.
pub fn list(raw: &Value) -> Option<NativeValue> {
    let entries = raw.as_array()?;
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match decode_entry(entry) {
            Some(value) => items.push(value),
            None => debug!(index, "dropping list element"),
        }
    }
    if items.is_empty() {
        None
    } else {
        Some(NativeValue::List(items))
    }
}

/// `M`: an object of field name to tagged entry.
///
/// Field names are used verbatim. Fields that do not decode are skipped; a
/// map with no surviving fields is itself dropped.
pub fn map(raw: &Value) -> Option<NativeValue> {
    let entries = raw.as_object()?;
    let mut fields = BTreeMap::new();
    for (field, entry) in entries {
        match decode_entry(entry) {
            Some(value) => {
                fields.insert(field.clone(), value);
            }
            None => debug!(field = field.as_str(), "dropping map field"),
        }
    }
    if fields.is_empty() {
        None
    } else {
        Some(NativeValue::Map(fields))
    }
}

/// Optional sign, one or more digits, optionally `.` and one or more digits.
fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    all_digits(whole) && fraction.map_or(true, all_digits)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Shape check for `YYYY-MM-DDTHH:MM:SS(.fff)?(Z|±HH:MM)`.
///
/// Only the layout is checked here; component ranges are left to chrono.
fn looks_like_rfc3339(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 20 {
        return false;
    }
    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);
    let fixed = digits(0..4)
        && b[4] == b'-'
        && digits(5..7)
        && b[7] == b'-'
        && digits(8..10)
        && b[10] == b'T'
        && digits(11..13)
        && b[13] == b':'
        && digits(14..16)
        && b[16] == b':'
        && digits(17..19);
    if !fixed {
        return false;
    }

    let mut rest = &b[19..];
    if let Some(after_dot) = rest.strip_prefix(b".") {
        let frac_len = after_dot.iter().take_while(|c| c.is_ascii_digit()).count();
        if frac_len == 0 {
            return false;
        }
        rest = &after_dot[frac_len..];
    }

    match rest {
        [b'Z'] => true,
        [sign, h1, h2, b':', m1, m2] if *sign == b'+' || *sign == b'-' => {
            [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}
