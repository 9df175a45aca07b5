use std::fmt;

/// Crate-wide `Result` type using [`RecjsonError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, RecjsonError>;

/// Top-level error type for record conversion operations.
///
/// Conversion itself never fails: unregistered foreign values either
/// degrade to strings or pass through. The failures that remain come from
/// the record being enumerated and from the JSON text boundary.
#[derive(Debug)]
pub enum RecjsonError {
    /// Attribute enumeration failed inside a record implementation.
    Record(String),

    /// JSON text encoding failed, including the case of a foreign value
    /// reaching the encoder with the string fallback disabled.
    Json(serde_json::Error),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for RecjsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecjsonError::Record(msg) => write!(f, "Record access error: {msg}"),
            RecjsonError::Json(e) => write!(f, "JSON encoding error: {e}"),
        }
    }
}

impl std::error::Error for RecjsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecjsonError::Record(_) => None,
            RecjsonError::Json(e) => Some(e),
        }
    }
}

/* ========================= Conversions to RecjsonError ========================= */

impl From<serde_json::Error> for RecjsonError {
    fn from(err: serde_json::Error) -> Self {
        RecjsonError::Json(err)
    }
}

impl From<String> for RecjsonError {
    fn from(msg: String) -> Self {
        RecjsonError::Record(msg)
    }
}

impl From<&str> for RecjsonError {
    fn from(msg: &str) -> Self {
        RecjsonError::Record(msg.to_owned())
    }
}
