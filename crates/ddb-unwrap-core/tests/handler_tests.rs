//! Per-tag handler rules: trimming, validation, type promotion, and
//! wrongly-shaped payloads.
use ddb_unwrap_core::handlers::{boolean, list, map, null, number, string, FALSY, TRUTHY};
use ddb_unwrap_core::NativeValue;
use serde_json::json;

fn s(v: &str) -> NativeValue {
    NativeValue::String(v.to_string())
}

// ============================================================================
// S
// ============================================================================

#[test]
fn string_is_trimmed() {
    assert_eq!(string(&json!("  hello  ")), Some(s("hello")));
    assert_eq!(string(&json!("\tline\n")), Some(s("line")));
}

#[test]
fn string_inner_whitespace_is_kept() {
    assert_eq!(string(&json!(" a  b ")), Some(s("a  b")));
}

#[test]
fn empty_string_is_dropped() {
    assert_eq!(string(&json!("")), None);
    assert_eq!(string(&json!("   ")), None);
}

#[test]
fn utc_timestamp_becomes_epoch_seconds() {
    assert_eq!(
        string(&json!("2023-01-01T00:00:00Z")),
        Some(NativeValue::Integer(1_672_531_200))
    );
}

#[test]
fn offset_timestamp_is_normalized_to_utc() {
    // 2014-07-16T20:55:46Z
    assert_eq!(
        string(&json!("2014-07-16T21:55:46+01:00")),
        Some(NativeValue::Integer(1_405_544_146))
    );
    assert_eq!(
        string(&json!("2014-07-16T15:55:46-05:00")),
        Some(NativeValue::Integer(1_405_544_146))
    );
}

#[test]
fn fractional_seconds_are_truncated() {
    assert_eq!(
        string(&json!(" 2023-01-01T00:00:00.999Z ")),
        Some(NativeValue::Integer(1_672_531_200))
    );
}

#[test]
fn pre_epoch_timestamp_is_negative() {
    assert_eq!(
        string(&json!("1969-12-31T23:59:59Z")),
        Some(NativeValue::Integer(-1))
    );
}

#[test]
fn timestamp_shaped_but_invalid_is_dropped() {
    assert_eq!(string(&json!("2023-13-01T00:00:00Z")), None);
    assert_eq!(string(&json!("2023-02-30T00:00:00Z")), None);
    assert_eq!(string(&json!("2023-01-01T25:00:00Z")), None);
}

#[test]
fn second_sixty_is_dropped() {
    assert_eq!(string(&json!("2016-06-15T12:34:60Z")), None);
    assert_eq!(string(&json!("2016-12-31T23:59:60Z")), None);
    assert_eq!(string(&json!("2016-12-31T23:59:60.5+01:00")), None);
    assert_eq!(
        string(&json!("2016-12-31T23:59:59Z")),
        Some(NativeValue::Integer(1_483_228_799))
    );
}

#[test]
fn near_timestamps_stay_strings() {
    // Date only, lowercase separator, missing zone, bad fraction.
    for text in [
        "2023-01-01",
        "2023-01-01t00:00:00Z",
        "2023-01-01T00:00:00",
        "2023-01-01T00:00:00.Z",
        "2023-01-01 00:00:00Z",
        "2023-01-01T00:00:00+0100",
        "x2023-01-01T00:00:00Z",
    ] {
        assert_eq!(string(&json!(text)), Some(s(text)), "input: {text}");
    }
}

// ============================================================================
// N
// ============================================================================

#[test]
fn integer_literals() {
    assert_eq!(number(&json!("42")), Some(NativeValue::Integer(42)));
    assert_eq!(number(&json!("-7")), Some(NativeValue::Integer(-7)));
    assert_eq!(number(&json!("+7")), Some(NativeValue::Integer(7)));
    assert_eq!(number(&json!("0")), Some(NativeValue::Integer(0)));
}

#[test]
fn leading_zeros_are_stripped() {
    assert_eq!(number(&json!("0012")), Some(NativeValue::Integer(12)));
    assert_eq!(number(&json!("-001.50")), Some(NativeValue::Float(-1.5)));
}

#[test]
fn decimal_point_means_float() {
    assert_eq!(number(&json!("3.5")), Some(NativeValue::Float(3.5)));
    assert_eq!(number(&json!("8.0")), Some(NativeValue::Float(8.0)));
}

#[test]
fn number_is_trimmed() {
    assert_eq!(number(&json!("  1.50 ")), Some(NativeValue::Float(1.5)));
}

#[test]
fn number_pattern_is_anchored_at_both_ends() {
    assert_eq!(number(&json!("abc123")), None);
    assert_eq!(number(&json!("12abc")), None);
    assert_eq!(number(&json!("1 2")), None);
}

#[test]
fn malformed_numbers_are_dropped() {
    for text in ["", " ", "8.", ".5", "+", "-", "1.2.3", "1e5", "0x10", "1,000", "NaN", "inf", "--1"] {
        assert_eq!(number(&json!(text)), None, "input: {text:?}");
    }
}

#[test]
fn integer_overflow_is_dropped() {
    assert_eq!(
        number(&json!("9223372036854775807")),
        Some(NativeValue::Integer(i64::MAX))
    );
    assert_eq!(number(&json!("9223372036854775808")), None);
}

#[test]
fn float_overflow_to_infinity_is_dropped() {
    let huge = format!("{}.0", "9".repeat(400));
    assert_eq!(number(&json!(huge)), None);
}

// ============================================================================
// BOOL / NULL
// ============================================================================

#[test]
fn every_truthy_token_is_true() {
    for token in TRUTHY {
        assert_eq!(boolean(&json!(token)), Some(NativeValue::Bool(true)), "{token}");
    }
}

#[test]
fn every_falsy_token_is_false() {
    for token in FALSY {
        assert_eq!(boolean(&json!(token)), Some(NativeValue::Bool(false)), "{token}");
    }
}

#[test]
fn bool_is_trimmed() {
    assert_eq!(boolean(&json!(" True ")), Some(NativeValue::Bool(true)));
}

#[test]
fn other_bool_spellings_are_dropped() {
    for text in ["yes", "no", "tRUE", "FaLsE", "2", "", "truthy"] {
        assert_eq!(boolean(&json!(text)), None, "input: {text:?}");
    }
}

#[test]
fn truthy_null_is_the_marker() {
    for token in TRUTHY {
        assert_eq!(null(&json!(token)), Some(NativeValue::NullMarker), "{token}");
    }
    assert_eq!(null(&json!("  true ")), Some(NativeValue::NullMarker));
}

#[test]
fn falsy_or_unknown_null_is_dropped() {
    for token in FALSY {
        assert_eq!(null(&json!(token)), None, "{token}");
    }
    assert_eq!(null(&json!("maybe")), None);
}

// ============================================================================
// L / M
// ============================================================================

#[test]
fn list_keeps_survivors_in_order() {
    let raw = json!([{"N": "1"}, {"BOOL": "nope"}, {"N": "2"}, {"S": " z "}]);
    assert_eq!(
        list(&raw),
        Some(NativeValue::List(vec![
            NativeValue::Integer(1),
            NativeValue::Integer(2),
            s("z"),
        ]))
    );
}

#[test]
fn list_with_no_survivors_is_dropped() {
    assert_eq!(list(&json!([])), None);
    assert_eq!(list(&json!([{"S": ""}, {"X": "1"}, {"NULL": "false"}])), None);
}

#[test]
fn list_skips_non_entry_elements() {
    let raw = json!(["bare", 5, null, {"N": "1", "S": "two tags"}, {}, {"N": "3"}]);
    assert_eq!(list(&raw), Some(NativeValue::List(vec![NativeValue::Integer(3)])));
}

#[test]
fn map_keeps_valid_fields() {
    let raw = json!({"a": {"S": ""}, "b": {"N": "3.5"}});
    let NativeValue::Map(fields) = map(&raw).unwrap() else {
        panic!("expected a map");
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["b"], NativeValue::Float(3.5));
}

#[test]
fn map_field_names_are_not_trimmed() {
    let raw = json!({" padded ": {"N": "1"}});
    let NativeValue::Map(fields) = map(&raw).unwrap() else {
        panic!("expected a map");
    };
    assert!(fields.contains_key(" padded "));
}

#[test]
fn map_with_no_survivors_is_dropped() {
    assert_eq!(map(&json!({})), None);
    assert_eq!(map(&json!({"a": {"BOOL": "x"}, "b": {"M": {}}})), None);
}

// ============================================================================
// Wrongly-shaped payloads never panic
// ============================================================================

#[test]
fn every_handler_rejects_wrong_shapes() {
    let scalar_handlers: [(&str, fn(&serde_json::Value) -> Option<NativeValue>); 4] =
        [("S", string), ("N", number), ("BOOL", boolean), ("NULL", null)];
    let non_strings = [
        json!(null),
        json!(true),
        json!(12),
        json!(1.5),
        json!(["1"]),
        json!({"S": "1"}),
    ];
    for (name, handler) in scalar_handlers {
        for raw in &non_strings {
            assert_eq!(handler(raw), None, "{name} accepted {raw}");
        }
    }

    for raw in [json!("[]"), json!(1), json!(null), json!({"0": {"N": "1"}})] {
        assert_eq!(list(&raw), None, "L accepted {raw}");
    }
    for raw in [json!("{}"), json!(1), json!(null), json!([{"N": "1"}])] {
        assert_eq!(map(&raw), None, "M accepted {raw}");
    }
}
