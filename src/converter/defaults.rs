//! Ready-made converters and the stock configuration.
//!
//! `default_converter()` ships the conversions consumers expect out of the
//! box: calendar dates and timestamps become ISO 8601 strings. The base64
//! and UUID helpers are not preloaded; register them on converters for
//! records that carry those types.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};
use uuid::Uuid;

use crate::value::Value;

use super::Converter;

/// Build a converter configured with the stock type conversions.
///
/// Keys become camelCase, unregistered foreign values fall back to their
/// string rendering, and the chrono date and time types are registered:
/// - `NaiveDate` → `"2020-01-01"`
/// - `NaiveDateTime` → `"2020-01-01T12:30:00"`, fractional seconds kept
///   only when nonzero
/// - `DateTime<Utc>` and `DateTime<FixedOffset>` → RFC 3339
pub fn default_converter() -> Converter {
    Converter::new()
        .with_type_converter(date_to_iso)
        .with_type_converter(datetime_to_iso)
        .with_type_converter(datetime_utc_to_iso)
        .with_type_converter(datetime_fixed_to_iso)
}

impl Default for Converter {
    /// Equivalent to [`default_converter`].
    fn default() -> Self {
        default_converter()
    }
}

/// Render a calendar date as an ISO 8601 day string.
pub fn date_to_iso(date: &NaiveDate) -> Value {
    Value::String(date.format("%Y-%m-%d").to_string())
}

/// Render a naive timestamp as an ISO 8601 string.
///
/// Microseconds are included only when the timestamp carries a nonzero
/// fractional second.
pub fn datetime_to_iso(datetime: &NaiveDateTime) -> Value {
    let format = if datetime.nanosecond() == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    Value::String(datetime.format(format).to_string())
}

/// Render a UTC timestamp as an RFC 3339 string.
pub fn datetime_utc_to_iso(datetime: &DateTime<Utc>) -> Value {
    Value::String(datetime.to_rfc3339())
}

/// Render a fixed-offset timestamp as an RFC 3339 string.
pub fn datetime_fixed_to_iso(datetime: &DateTime<FixedOffset>) -> Value {
    Value::String(datetime.to_rfc3339())
}

/// Render raw bytes as standard base64 text.
///
/// The parameter type must match the stored attribute type exactly for
/// dispatch, hence `&Vec<u8>` rather than a slice.
#[allow(clippy::ptr_arg)]
pub fn bytes_to_base64(bytes: &Vec<u8>) -> Value {
    use base64::Engine;
    Value::String(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Render a UUID as hyphenated text.
pub fn uuid_to_string(id: &Uuid) -> Value {
    Value::String(id.to_string())
}
