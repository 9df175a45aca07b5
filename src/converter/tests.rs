//! Comprehensive tests for the conversion engine.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use super::*;
use crate::error::{RecjsonError, Result};
use crate::record::{Attribute, Record, RecordExt};
use crate::value::{Map, Value};

#[derive(Clone, Debug, PartialEq)]
struct InstanceState {
    loaded: bool,
}

struct UserRow {
    user_id: i64,
    created_at: NaiveDate,
    instance_state: InstanceState,
}

impl UserRow {
    fn sample() -> Self {
        UserRow {
            user_id: 5,
            created_at: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            instance_state: InstanceState { loaded: true },
        }
    }
}

impl Record for UserRow {
    fn attributes(&self) -> Result<Vec<Attribute<'_>>> {
        Ok(vec![
            Attribute::new("user_id", self.user_id),
            Attribute::new("created_at", Value::other(self.created_at)),
            Attribute::new(
                "_sa_instance_state",
                Value::other(self.instance_state.clone()),
            ),
        ])
    }
}

struct FailingRecord;

impl Record for FailingRecord {
    fn attributes(&self) -> Result<Vec<Attribute<'_>>> {
        Err(RecjsonError::Record("attribute store detached".to_string()))
    }
}

// ===== Value Dispatch Tests =====

#[test]
fn test_safe_values_pass_through_unchanged() {
    let converter = Converter::new();

    assert_eq!(converter.convert_value(Value::Null), Value::Null);
    assert_eq!(converter.convert_value(Value::Bool(true)), Value::Bool(true));
    assert_eq!(converter.convert_value(Value::Int(5)), Value::Int(5));
    assert_eq!(converter.convert_value(Value::Float(2.5)), Value::Float(2.5));
    assert_eq!(
        converter.convert_value(Value::from("text")),
        Value::from("text")
    );
}

#[test]
fn test_registered_converter_overrides_safe_passthrough() {
    let converter =
        Converter::new().with_type_converter(|n: &i64| Value::String(format!("int:{n}")));

    assert_eq!(
        converter.convert_value(Value::Int(41)),
        Value::String("int:41".to_string())
    );
    // other safe types keep the plain passthrough
    assert_eq!(converter.convert_value(Value::Float(1.0)), Value::Float(1.0));
}

#[test]
fn test_registered_converter_wins_over_fallback() {
    let converter =
        Converter::new().with_type_converter(|state: &InstanceState| Value::Bool(state.loaded));

    let converted = converter.convert_value(Value::other(InstanceState { loaded: true }));
    assert_eq!(converted, Value::Bool(true));
}

#[test]
fn test_fallback_stringifies_unregistered_foreign_values() {
    let converter = Converter::new();

    let converted = converter.convert_value(Value::other(InstanceState { loaded: true }));
    assert_eq!(
        converted,
        Value::String("InstanceState { loaded: true }".to_string())
    );
}

#[test]
fn test_fallback_disabled_passes_foreign_values_through() {
    let converter = Converter::new().with_str_fallback(false);

    let converted = converter.convert_value(Value::other(InstanceState { loaded: false }));
    assert_eq!(converted, Value::other(InstanceState { loaded: false }));
}

#[test]
fn test_dispatch_checks_exact_type_only() {
    let converter = Converter::new()
        .with_str_fallback(false)
        .with_type_converter(date_to_iso);

    let datetime = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    // NaiveDateTime is a distinct type; the date converter must not apply
    let converted = converter.convert_value(Value::other(datetime));
    assert!(matches!(converted, Value::Other(_)));
}

#[test]
fn test_replacing_converter_keeps_latest() {
    let mut converter = Converter::new();
    converter.add_type_converter(|_: &i64| Value::String("first".to_string()));
    converter.add_type_converter(|_: &i64| Value::String("second".to_string()));

    assert_eq!(converter.registry().len(), 1);
    assert_eq!(
        converter.convert_value(Value::Int(0)),
        Value::String("second".to_string())
    );
}

#[test]
fn test_containers_pass_through_without_element_dispatch() {
    let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let converter = default_converter();

    let converted = converter.convert_value(Value::Array(vec![Value::other(date)]));
    let items = converted.as_array().unwrap();
    assert!(matches!(items[0], Value::Other(_)));

    let mut inner = Map::new();
    inner.insert("when", Value::other(date));
    let converted = converter.convert_value(Value::Map(inner));
    assert!(matches!(
        converted.as_map().unwrap().get("when"),
        Some(Value::Other(_))
    ));
}

// ===== Record Conversion Tests =====

#[test]
fn test_converts_mapped_row() {
    let row = UserRow::sample();
    let converter = Converter::default();

    let dict = converter.convert(&row).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get("userId"), Some(&Value::Int(5)));
    assert_eq!(
        dict.get("createdAt"),
        Some(&Value::String("2020-01-01".to_string()))
    );
    assert!(!dict.contains_key("_sa_instance_state"));
    assert!(!dict.contains_key("_saInstanceState"));

    let json = row.to_json(&converter).unwrap();
    assert_eq!(json, r#"{"userId":5,"createdAt":"2020-01-01"}"#);
}

#[test]
fn test_output_preserves_attribute_order() {
    let row = UserRow::sample();
    let dict = Converter::default().convert(&row).unwrap();
    assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["userId", "createdAt"]);
}

#[test]
fn test_default_filter_drops_leading_underscore_names() {
    let mut bag = Map::new();
    bag.insert("visible", 1i64);
    bag.insert("_hidden", 2i64);

    let dict = Converter::new().convert(&bag).unwrap();
    assert_eq!(dict.len(), 1);
    assert!(dict.contains_key("visible"));
}

#[test]
fn test_custom_attribute_filter() {
    let mut bag = Map::new();
    bag.insert("user_id", 5i64);
    bag.insert("password", "hunter2");
    bag.insert("_private", 1i64);

    let converter = Converter::new().with_attribute_filter(|name| name != "password");
    let dict = converter.convert(&bag).unwrap();

    assert!(dict.contains_key("userId"));
    assert!(!dict.contains_key("password"));
    // replacing the filter also replaces the underscore rule
    assert!(dict.contains_key("_private"));
}

#[test]
fn test_identity_key_converter() {
    let mut bag = Map::new();
    bag.insert("user_id", 5i64);

    let converter = Converter::new().with_key_converter(crate::keys::identity);
    let dict = converter.convert(&bag).unwrap();

    assert!(dict.contains_key("user_id"));
    assert!(!dict.contains_key("userId"));
}

#[test]
fn test_map_bag_to_json() {
    let mut bag = Map::new();
    bag.insert("task_name", "cleanup");
    bag.insert("attempt_count", 3i64);

    let json = bag.to_json(&Converter::default()).unwrap();
    assert_eq!(json, r#"{"taskName":"cleanup","attemptCount":3}"#);
}

#[test]
fn test_empty_record_converts_to_empty_map() {
    let bag = Map::new();
    let dict = Converter::default().convert(&bag).unwrap();
    assert!(dict.is_empty());
    assert_eq!(bag.to_json(&Converter::default()).unwrap(), "{}");
}

#[test]
fn test_record_error_propagates() {
    let err = Converter::default().convert(&FailingRecord).unwrap_err();
    assert!(matches!(err, RecjsonError::Record(msg) if msg == "attribute store detached"));
}

#[test]
fn test_conversion_is_deterministic() {
    let row = UserRow::sample();
    let converter = Converter::default();
    assert_eq!(
        converter.convert(&row).unwrap(),
        converter.convert(&row).unwrap()
    );
}

// ===== Configuration Tests =====

#[test]
fn test_with_type_converters_merges_registry() {
    let mut extra = TypeConverterRegistry::new();
    extra.insert(uuid_to_string);
    extra.insert(|n: &i64| Value::String(format!("{n}")));

    let converter = default_converter().with_type_converters(extra);
    assert!(converter.registry().contains::<Uuid>());
    assert!(converter.registry().contains::<NaiveDate>());
    assert_eq!(
        converter.convert_value(Value::Int(3)),
        Value::String("3".to_string())
    );
}

#[test]
fn test_add_type_converter_after_construction() {
    let mut converter = Converter::default();
    converter.add_type_converter(bytes_to_base64);
    converter.add_type_converter(uuid_to_string);

    let payload: Vec<u8> = vec![0x01, 0x02, 0x03];
    assert_eq!(
        converter.convert_value(Value::other(payload)),
        Value::String("AQID".to_string())
    );
    assert_eq!(
        converter.convert_value(Value::other(Uuid::nil())),
        Value::String("00000000-0000-0000-0000-000000000000".to_string())
    );
}

#[test]
fn test_default_converter_formats_timestamps() {
    let mut bag = Map::new();
    bag.insert(
        "updated_at",
        Value::other(Utc.with_ymd_and_hms(2020, 1, 1, 12, 30, 0).unwrap()),
    );
    bag.insert(
        "local_time",
        Value::other(
            FixedOffset::east_opt(3600)
                .unwrap()
                .with_ymd_and_hms(2020, 1, 1, 12, 30, 0)
                .unwrap(),
        ),
    );

    let dict = Converter::default().convert(&bag).unwrap();
    assert_eq!(
        dict.get("updatedAt"),
        Some(&Value::String("2020-01-01T12:30:00+00:00".to_string()))
    );
    assert_eq!(
        dict.get("localTime"),
        Some(&Value::String("2020-01-01T12:30:00+01:00".to_string()))
    );
}

#[test]
fn test_to_json_fails_for_unconverted_foreign_value() {
    let row = UserRow::sample();
    let converter = Converter::new().with_str_fallback(false);

    let err = row.to_json(&converter).unwrap_err();
    assert!(err.to_string().contains("NaiveDate"));
    assert!(matches!(err, RecjsonError::Json(_)));
}
