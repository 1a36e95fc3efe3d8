//! Helpers for untyped input.
//!
//! Messages are often assembled from JSON handed over by other systems. These
//! helpers describe the runtime type of such values using the type vocabulary
//! the notification service reports in its error messages.

use serde_json::Value;

/// Name of the runtime type of `value`.
///
/// Integers and floats are told apart the way the service does: whole numbers
/// are `integer`, everything else is `double`.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NULL",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "double",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a string counts as "empty": `""` and `"0"` both do.
///
/// Used for the priority default and for picking the language-neutral
/// value of a multilingual field.
pub fn is_empty_str(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Whether `value` counts as "empty" for optional settings.
///
/// Empty values fall back to the setting's default instead of being
/// type-checked.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => is_empty_str(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
