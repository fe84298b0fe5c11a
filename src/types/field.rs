//! Best-effort field extraction from untyped JSON records
//!
//! Catalogue and sales documents are not assumed to be well-formed, so records
//! are kept as [`serde_json::Value`] and each field is pulled out and coerced
//! explicitly. Every helper returns a [`FieldError`] instead of panicking.

use crate::types::FieldError;
use serde_json::{Map, Value};

/// Borrow a record as a JSON object
pub fn as_object(record: &Value) -> Result<&Map<String, Value>, FieldError> {
    record.as_object().ok_or(FieldError::NotAnObject)
}

/// Look up a required key
pub fn require<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, FieldError> {
    object.get(key).ok_or(FieldError::MissingKey(key))
}

/// Look up a required key and coerce it to `f64`
pub fn require_f64(object: &Map<String, Value>, key: &'static str) -> Result<f64, FieldError> {
    coerce_f64(require(object, key)?).ok_or(FieldError::NotNumeric(key))
}

/// Coerce a JSON value to a float
///
/// Numbers convert directly, strings are parsed after trimming surrounding
/// whitespace, booleans map to 1 and 0. Everything else is rejected.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Name of a JSON value's kind, for diagnostics
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
