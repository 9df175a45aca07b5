//! Dynamic attribute values.
//!
//! This module provides the value model shared by records and converters:
//! - `Value`: the JSON-safe shapes as first-class variants, plus an opaque
//!   variant for foreign types awaiting a registered type converter
//! - `OpaqueValue`: the object-safe trait foreign values are stored behind
//! - `Map`: insertion-ordered string-keyed mapping used for converted output

use std::any::Any;
use std::fmt;
use std::sync::Arc;

mod map;

pub use map::Map;

/// Object-safe handle for values outside the JSON-safe set.
///
/// Implemented automatically for every `T: Any + Debug + Send + Sync +
/// PartialEq`, so domain types can be stored with [`Value::other`] without
/// manual trait work. `Debug` doubles as the fallback string rendering;
/// `PartialEq` backs value equality.
pub trait OpaqueValue: Any + fmt::Debug + Send + Sync {
    /// Access the underlying value for exact-type dispatch.
    fn as_any(&self) -> &dyn Any;

    /// Name of the underlying Rust type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Compare against another value of a possibly different type.
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T> OpaqueValue for T
where
    T: Any + fmt::Debug + Send + Sync + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|v| self == v)
    }
}

/// A dynamically typed attribute value.
///
/// The non-`Other` variants form the JSON-safe set: they map directly onto
/// JSON shapes and pass through conversion unchanged unless a converter is
/// registered for their exact type. `Other` holds any foreign value and is
/// what the converter's fallback policy applies to.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absent value, encoded as JSON null.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Insertion-ordered map with string keys.
    Map(Map),
    /// Foreign value outside the JSON-safe set.
    Other(Arc<dyn OpaqueValue>),
}

impl Value {
    /// Wrap a foreign value as an opaque [`Value::Other`].
    ///
    /// # Arguments
    /// * `value` - Any comparable, printable, thread-safe value
    ///
    /// # Returns
    /// * `Value` - Opaque value awaiting a registered type converter
    pub fn other<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + Send + Sync + PartialEq,
    {
        Value::Other(Arc::new(value))
    }

    /// Access the exact runtime type carried by this value.
    ///
    /// Converter dispatch is keyed on the `TypeId` behind the returned
    /// reference: `Int` exposes an `i64`, `String` a `String`, `Array` a
    /// `Vec<Value>`, `Other` the foreign value itself, and so on. `Null`
    /// exposes the unit type.
    pub fn as_any(&self) -> &dyn Any {
        match self {
            Value::Null => &(),
            Value::Bool(b) => b,
            Value::Int(n) => n,
            Value::Float(f) => f,
            Value::String(s) => s,
            Value::Array(items) => items,
            Value::Map(map) => map,
            Value::Other(value) => value.as_any(),
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as `bool` if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as `i64` if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as `f64` if this is a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow as `&str` if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as a slice if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as a map if this is a mapping.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Human-readable name of the carried type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Other(value) => value.type_name(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a.dyn_eq(b.as_any()),
            _ => false,
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
