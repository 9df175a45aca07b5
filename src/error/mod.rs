//! Error handling module for record conversion.
//!
//! This module provides the crate's error types:
//! - A single top-level error enum covering record enumeration failures
//!   and JSON encoding failures
//! - A crate-wide `Result` alias used by all fallible operations
//!
//! # Example
//!
//! ```rust
//! use recjson::error::{RecjsonError, Result};
//!
//! fn enumerate() -> Result<()> {
//!     Err(RecjsonError::Record("attribute store detached".to_string()))
//! }
//!
//! let err = enumerate().unwrap_err();
//! assert!(err.to_string().contains("detached"));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{RecjsonError, Result};
