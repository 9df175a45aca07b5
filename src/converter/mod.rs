//! Record conversion engine.
//!
//! This module turns records into JSON-safe mappings with:
//! - Per-type conversion dispatch on the exact runtime type of each value
//! - Key name transformation (camelCase by default)
//! - Attribute filtering (leading-underscore names dropped by default)
//! - Fallback stringification for foreign values without a converter
//!
//! # Design
//!
//! Dispatch is deliberately non-polymorphic: a converter registered for a
//! type applies to exactly that type, never to related or wrapper types.
//! The registry is consulted before the JSON-safe passthrough, so a
//! registered conversion overrides even a safe type.
//!
//! # Example
//!
//! ```
//! use recjson::{Attribute, Converter, Record, RecordExt, Result};
//!
//! struct User {
//!     user_id: i64,
//!     display_name: String,
//! }
//!
//! impl Record for User {
//!     fn attributes(&self) -> Result<Vec<Attribute<'_>>> {
//!         Ok(vec![
//!             Attribute::new("user_id", self.user_id),
//!             Attribute::new("display_name", self.display_name.as_str()),
//!         ])
//!     }
//! }
//!
//! let user = User { user_id: 7, display_name: "Ada".to_string() };
//! let json = user.to_json(&Converter::default())?;
//! assert_eq!(json, r#"{"userId":7,"displayName":"Ada"}"#);
//! # Ok::<(), recjson::RecjsonError>(())
//! ```

mod defaults;
mod registry;

pub use defaults::{
    bytes_to_base64, date_to_iso, datetime_fixed_to_iso, datetime_to_iso, datetime_utc_to_iso,
    default_converter, uuid_to_string,
};
pub use registry::TypeConverterRegistry;

#[cfg(test)]
mod tests;

use std::any::Any;
use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::keys;
use crate::record::Record;
use crate::value::{Map, Value};

/// Key transform applied to serialized attribute names.
pub type KeyConverter = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Predicate deciding which attributes are serialized.
pub type AttributeFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Converts records into JSON-safe mappings.
///
/// A converter bundles four pieces of policy: the type converter registry,
/// the key transform, the attribute filter and the string fallback flag.
/// All of them are fixed per instance; a configured converter is `Send`
/// and `Sync` and can be shared freely, while registration requires
/// exclusive access.
pub struct Converter {
    registry: TypeConverterRegistry,
    key_converter: KeyConverter,
    attribute_filter: AttributeFilter,
    str_fallback: bool,
}

impl Converter {
    /// Create a converter with no registered type converters.
    ///
    /// Starts from camelCase keys, string fallback enabled, and the
    /// reserved-prefix filter dropping attributes whose name begins with
    /// an underscore. `Converter::default()` additionally registers the
    /// stock date and time conversions.
    pub fn new() -> Self {
        Converter {
            registry: TypeConverterRegistry::new(),
            key_converter: Box::new(keys::snake_to_camel),
            attribute_filter: Box::new(|name| !name.starts_with('_')),
            str_fallback: true,
        }
    }

    /// Replace the key transform, builder style.
    ///
    /// # Arguments
    /// * `convert` - Transform applied to every serialized attribute name
    pub fn with_key_converter<F>(mut self, convert: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.key_converter = Box::new(convert);
        self
    }

    /// Enable or disable fallback stringification, builder style.
    ///
    /// Enabled by default: foreign values without a registered converter
    /// are replaced by their string rendering. When disabled they pass
    /// through unchanged and JSON encoding reports them instead.
    pub fn with_str_fallback(mut self, enabled: bool) -> Self {
        self.str_fallback = enabled;
        self
    }

    /// Replace the attribute filter, builder style.
    ///
    /// The filter receives the attribute name as declared on the record
    /// and returns true to serialize it. The default drops names with a
    /// leading underscore.
    ///
    /// # Arguments
    /// * `include` - Predicate returning true for serialized attributes
    pub fn with_attribute_filter<F>(mut self, include: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.attribute_filter = Box::new(include);
        self
    }

    /// Register a type converter, builder style.
    pub fn with_type_converter<T, F>(mut self, convert: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.registry.insert(convert);
        self
    }

    /// Merge an already-built registry, builder style.
    ///
    /// Entries of `registry` win on type collisions.
    pub fn with_type_converters(mut self, registry: TypeConverterRegistry) -> Self {
        self.registry.merge(registry);
        self
    }

    /// Register a type converter on an existing converter.
    ///
    /// Registering a second converter for the same type replaces the
    /// first. Takes `&mut self`, so registration cannot overlap shared
    /// conversion use.
    ///
    /// # Arguments
    /// * `convert` - Function producing the JSON-safe replacement
    pub fn add_type_converter<T, F>(&mut self, convert: F)
    where
        T: Any,
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.registry.insert(convert);
    }

    /// Inspect the registered type converters.
    pub fn registry(&self) -> &TypeConverterRegistry {
        &self.registry
    }

    /// Convert a record into a JSON-safe mapping.
    ///
    /// Filtered attribute names are dropped; every remaining attribute
    /// gets its name key-converted and its value passed through
    /// [`Converter::convert_value`]. Output preserves the record's
    /// attribute order. The record itself is the only error source and
    /// its failure is returned unchanged.
    ///
    /// # Arguments
    /// * `record` - Record to convert
    ///
    /// # Returns
    /// * `Result<Map>` - JSON-safe mapping, or the record's error
    pub fn convert<R: Record + ?Sized>(&self, record: &R) -> Result<Map> {
        let attributes = record.attributes()?;
        trace!("Converting record with {} attributes", attributes.len());

        let mut output = Map::with_capacity(attributes.len());
        for attribute in attributes {
            if !(self.attribute_filter)(attribute.name) {
                trace!("Skipping filtered attribute: {}", attribute.name);
                continue;
            }
            let key = (self.key_converter)(attribute.name);
            output.insert(key, self.convert_value(attribute.value));
        }
        Ok(output)
    }

    /// Convert a single value.
    ///
    /// Dispatch order:
    /// 1. the converter registered for the value's exact runtime type
    /// 2. fallback stringification, when enabled, for foreign values
    /// 3. the value unchanged
    ///
    /// Arrays and maps are not recursed into; their elements reach the
    /// output as stored.
    pub fn convert_value(&self, value: Value) -> Value {
        if let Some(converted) = self.registry.dispatch(value.as_any()) {
            trace!("Dispatched registered converter for {}", value.type_name());
            return converted;
        }
        match value {
            Value::Other(opaque) if self.str_fallback => {
                trace!("Stringifying unconverted value of type {}", opaque.type_name());
                Value::String(format!("{opaque:?}"))
            }
            other => other,
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("registry", &self.registry)
            .field("str_fallback", &self.str_fallback)
            .finish_non_exhaustive()
    }
}
