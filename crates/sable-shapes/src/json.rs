//! JSON text from values, and typed values from JSON text.
//!
//! Deserialization happens in two steps so that the two ways it can fail
//! stay distinguishable:
//! 1. the text is parsed into a plain [`serde_json::Value`]
//! 2. a fresh `T` is built from that value's fields
//!
//! Nothing is returned unless both steps succeed.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Failure while converting between values and JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not syntactically valid JSON.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// The input is valid JSON but does not describe the requested type.
    #[error("JSON does not match the expected shape: {0}")]
    Shape(#[source] serde_json::Error),

    /// The value cannot be represented as JSON (e.g. a map with non-string keys).
    #[error("cannot encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Encode `value` as compact JSON.
///
/// Struct fields are written in declaration order; sequences keep their order.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if the value's `Serialize` implementation
/// fails or produces something JSON cannot hold.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Encode `value` as indented JSON.
///
/// # Errors
///
/// See [`serialize`].
pub fn serialize_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Encode)
}

/// Build a new `T` from JSON text.
///
/// `T` supplies the behaviour; the text supplies the field values. Fields
/// the text does not mention are left to `T`'s own defaults, and fields `T`
/// does not know about are ignored.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] if `text` is not valid JSON, and
/// [`JsonError::Shape`] if it is valid but cannot populate a `T`.
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    let fields: Value = serde_json::from_str(text).map_err(JsonError::Parse)?;
    serde_json::from_value(fields).map_err(JsonError::Shape)
}
