//! JSON text boundary.
//!
//! Serde implementations and encoding helpers for converted output:
//! - `Serialize` for `Value` and `Map`; a foreign value that survived
//!   conversion produces a serialization error naming its type
//! - Compact and pretty string encoders
//! - Bridges between `Value` and `serde_json::Value`

use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::value::{Map, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Map(map) => map.serialize(serializer),
            Value::Other(opaque) => Err(S::Error::custom(format!(
                "value of type {} is not JSON-safe; register a type converter or enable the string fallback",
                opaque.type_name()
            ))),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Encode a converted mapping as a compact JSON string.
pub fn to_json_string(map: &Map) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}

/// Encode a converted mapping as a pretty-printed JSON string.
pub fn to_json_string_pretty(map: &Map) -> Result<String> {
    Ok(serde_json::to_string_pretty(map)?)
}

/// Bridge a value into the serde_json value model.
///
/// Fails for foreign values, like any other serde serializer would.
pub fn to_json_value(value: &Value) -> Result<JsonValue> {
    Ok(serde_json::to_value(value)?)
}

/// Bridge a serde_json value into the crate value model.
///
/// Numbers become `Int` when they fit in `i64` and `Float` otherwise;
/// arbitrary-precision numbers representable as neither fall back to
/// their decimal rendering.
pub fn from_json_value(json: JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Array(items.into_iter().map(from_json_value).collect()),
        JsonValue::Object(fields) => Value::Map(
            fields
                .into_iter()
                .map(|(k, v)| (k, from_json_value(v)))
                .collect(),
        ),
    }
}
