//! The record seam.
//!
//! Anything that can enumerate its attributes by name implements
//! [`Record`]; the converter consumes records exclusively through that
//! trait. [`RecordExt`] is implemented for every record and adds the
//! ready-made `to_dict`/`to_json` entry points.

use crate::converter::Converter;
use crate::error::Result;
use crate::json;
use crate::value::{Map, Value};

/// A single named attribute yielded by a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute<'a> {
    /// Attribute name as declared on the record.
    pub name: &'a str,
    /// Attribute value.
    pub value: Value,
}

impl<'a> Attribute<'a> {
    /// Build an attribute from a name and anything convertible to a value.
    pub fn new(name: &'a str, value: impl Into<Value>) -> Self {
        Attribute {
            name,
            value: value.into(),
        }
    }
}

/// Source of named attribute values.
///
/// Implementations enumerate attributes in declaration order and may fail;
/// the converter reports such a failure unchanged. Internal attributes
/// should be yielded too: filtering is the converter's job, and the
/// default filter already drops leading-underscore names.
pub trait Record {
    /// Enumerate the record's attributes in declaration order.
    fn attributes(&self) -> Result<Vec<Attribute<'_>>>;
}

/// A map doubles as a loose attribute bag, keyed by attribute name.
impl Record for Map {
    fn attributes(&self) -> Result<Vec<Attribute<'_>>> {
        Ok(self
            .iter()
            .map(|(name, value)| Attribute {
                name,
                value: value.clone(),
            })
            .collect())
    }
}

/// Ready-made conversion entry points for every record.
///
/// The converter is always passed explicitly; there is no process-wide
/// default instance. `Converter::default()` covers the common case.
pub trait RecordExt: Record {
    /// Convert into a JSON-safe mapping.
    fn to_dict(&self, converter: &Converter) -> Result<Map> {
        converter.convert(self)
    }

    /// Convert and encode as a compact JSON string.
    fn to_json(&self, converter: &Converter) -> Result<String> {
        json::to_json_string(&converter.convert(self)?)
    }

    /// Convert and encode as a pretty-printed JSON string.
    fn to_json_pretty(&self, converter: &Converter) -> Result<String> {
        json::to_json_string_pretty(&converter.convert(self)?)
    }
}

impl<R: Record + ?Sized> RecordExt for R {}
