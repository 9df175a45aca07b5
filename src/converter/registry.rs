//! Type converter registry.
//!
//! Stores conversion functions keyed by the `TypeId` of the value type
//! they handle. Lookup is one hash probe on the exact runtime type; no
//! subtype or coercion relationships are consulted.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::value::Value;

/// Boxed conversion function operating on a type-erased value.
type ConvertFn = Box<dyn Fn(&dyn Any) -> Value + Send + Sync>;

/// Registry of per-type conversion functions.
///
/// Each entry maps the exact `TypeId` of a value type to a function
/// producing its JSON-safe replacement. Registering a type that already
/// has an entry replaces the previous function.
#[derive(Default)]
pub struct TypeConverterRegistry {
    converters: HashMap<TypeId, ConvertFn>,
}

impl TypeConverterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conversion function for values of type `T`.
    ///
    /// # Arguments
    /// * `convert` - Function producing the JSON-safe replacement
    pub fn insert<T, F>(&mut self, convert: F)
    where
        T: Any,
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        debug!("Registering type converter for {}", std::any::type_name::<T>());
        let erased: ConvertFn = Box::new(move |value: &dyn Any| {
            match value.downcast_ref::<T>() {
                Some(typed) => convert(typed),
                // Lookup is keyed by TypeId::of::<T>(), so the downcast
                // cannot fail.
                None => Value::Null,
            }
        });
        self.converters.insert(TypeId::of::<T>(), erased);
    }

    /// Check if a converter is registered for type `T`.
    pub fn contains<T: Any>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Check if no converters are registered.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Move all entries of `other` into this registry.
    ///
    /// Entries of `other` win on type collisions.
    pub fn merge(&mut self, other: TypeConverterRegistry) {
        self.converters.extend(other.converters);
    }

    /// Run the converter registered for the value's exact type, if any.
    pub(crate) fn dispatch(&self, value: &dyn Any) -> Option<Value> {
        self.converters
            .get(&value.type_id())
            .map(|convert| convert(value))
    }
}

impl fmt::Debug for TypeConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeConverterRegistry")
            .field("registered", &self.converters.len())
            .finish()
    }
}
