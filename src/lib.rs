//! Record to JSON conversion library.
//!
//! This library converts in-memory records (attribute bags) into JSON-safe
//! mappings and JSON text, handling per-type value conversion, attribute
//! filtering and key naming in one place. Any type that can enumerate its
//! attributes gains `to_dict`/`to_json` behavior backed by a configured
//! converter.
//!
//! # Modules
//!
//! - `converter`: Conversion engine, type registry and stock converters
//! - `error`: Error types and handling
//! - `json`: Serde implementations and JSON text encoding
//! - `keys`: Key name transforms
//! - `record`: The record seam and ready-made entry points
//! - `value`: Dynamic values and the ordered output mapping
//!
//! # Example
//!
//! ```
//! use recjson::{Attribute, Converter, Record, RecordExt, Result};
//!
//! struct Order {
//!     order_id: i64,
//!     total_cents: i64,
//! }
//!
//! impl Record for Order {
//!     fn attributes(&self) -> Result<Vec<Attribute<'_>>> {
//!         Ok(vec![
//!             Attribute::new("order_id", self.order_id),
//!             Attribute::new("total_cents", self.total_cents),
//!         ])
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let order = Order { order_id: 1, total_cents: 250 };
//!     let json = order.to_json(&Converter::default())?;
//!     assert_eq!(json, r#"{"orderId":1,"totalCents":250}"#);
//!     Ok(())
//! }
//! ```

pub mod converter;
pub mod error;
pub mod json;
pub mod keys;
pub mod record;
pub mod value;

// Re-export commonly used types
pub use converter::{Converter, TypeConverterRegistry, default_converter};
pub use error::{RecjsonError, Result};
pub use record::{Attribute, Record, RecordExt};
pub use value::{Map, OpaqueValue, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
