use drillbook_types::{ArrayInput, LengthInput, Result};
use serde_json::Value;
use tracing::debug;

/// Character count of a string, or element count of an array.
///
/// Characters are Unicode scalar values, so a character outside the Basic
/// Multilingual Plane such as `"😀"` counts once, not as two UTF-16 units.
#[must_use]
pub fn get_length(input: &LengthInput) -> usize {
    match input {
        LengthInput::Text(s) => s.chars().count(),
        LengthInput::Array(a) => a.len(),
    }
}

/// Length of an untyped JSON value.
///
/// Strings and homogeneous arrays yield `Some(len)`. Any other value falls
/// through to `Ok(None)`; it is an absent result rather than an error. An
/// array mixing element types is an error.
pub fn get_length_of_json(value: &Value) -> Result<Option<usize>> {
    match value {
        Value::String(s) => Ok(Some(s.chars().count())),
        Value::Array(values) => {
            ArrayInput::check_elements(values)?;
            Ok(Some(values.len()))
        }
        other => {
            debug!("No length for {}", drillbook_types::json_kind(other));
            Ok(None)
        }
    }
}
