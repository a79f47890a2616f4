//! Closed value unions.
//!
//! Every input that may be "one of several types" is modelled as an enum so
//! callers match on the variant instead of inspecting a value at runtime.
//! Untyped JSON enters through the `TryFrom<Value>` impls, which reject
//! shapes the unions cannot represent.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A scalar that is exactly one of number, string or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Name of the active variant's type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A homogeneous sequence of strings, numbers or booleans.
///
/// An empty JSON array has no element type; it is read as `Texts(vec![])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayInput {
    Texts(Vec<String>),
    Numbers(Vec<f64>),
    Bools(Vec<bool>),
}

impl ArrayInput {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Texts(v) => v.len(),
            Self::Numbers(v) => v.len(),
            Self::Bools(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Texts(_) => "string",
            Self::Numbers(_) => "number",
            Self::Bools(_) => "boolean",
        }
    }

    /// Checks that every element has the type of the first one.
    ///
    /// Returns the element type name, or `None` for an empty slice.
    pub fn check_elements(values: &[Value]) -> Result<Option<&'static str>> {
        let Some(first) = values.first() else {
            return Ok(None);
        };
        let expected = scalar_kind(first).ok_or(Error::UnsupportedElement {
            index: 0,
            found: json_kind(first),
            allowed: "a string, number or boolean",
        })?;
        for (index, value) in values.iter().enumerate().skip(1) {
            if scalar_kind(value) != Some(expected) {
                return Err(Error::HeterogeneousArray {
                    index,
                    expected,
                    found: json_kind(value),
                });
            }
        }
        Ok(Some(expected))
    }

    /// Builds an array from untyped JSON elements.
    ///
    /// The first element fixes the element type; every later element must
    /// match it.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let array = match Self::check_elements(&values)? {
            None => Self::Texts(Vec::new()),
            Some("string") => Self::Texts(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            Some("number") => Self::Numbers(values.iter().filter_map(Value::as_f64).collect()),
            Some(_) => Self::Bools(values.iter().filter_map(Value::as_bool).collect()),
        };
        Ok(array)
    }
}

const fn scalar_kind(value: &Value) -> Option<&'static str> {
    match value {
        Value::String(_) => Some("string"),
        Value::Number(_) => Some("number"),
        Value::Bool(_) => Some("boolean"),
        _ => None,
    }
}

impl TryFrom<Value> for ArrayInput {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(values) => Self::from_values(values),
            other => Err(Error::NotAnArray {
                found: json_kind(&other),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ArrayInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl From<Vec<String>> for ArrayInput {
    fn from(v: Vec<String>) -> Self {
        Self::Texts(v)
    }
}

impl From<Vec<f64>> for ArrayInput {
    fn from(v: Vec<f64>) -> Self {
        Self::Numbers(v)
    }
}

impl From<Vec<bool>> for ArrayInput {
    fn from(v: Vec<bool>) -> Self {
        Self::Bools(v)
    }
}

/// Input accepted by length computation: a string or a homogeneous array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LengthInput {
    Text(String),
    Array(ArrayInput),
}

impl<'de> Deserialize<'de> for LengthInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Array(values) => ArrayInput::from_values(values)
                .map(Self::Array)
                .map_err(serde::de::Error::custom),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or an array, found {}",
                json_kind(&other)
            ))),
        }
    }
}

impl From<&str> for LengthInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for LengthInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ArrayInput> for LengthInput {
    fn from(a: ArrayInput) -> Self {
        Self::Array(a)
    }
}

/// One side of a deduplicating merge: strings or numbers, never mixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UniqueValues {
    Texts(Vec<String>),
    Numbers(Vec<f64>),
}

impl UniqueValues {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Texts(v) => v.len(),
            Self::Numbers(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Texts(_) => "string",
            Self::Numbers(_) => "number",
        }
    }
}

impl TryFrom<Value> for UniqueValues {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match ArrayInput::try_from(value)? {
            ArrayInput::Texts(v) => Ok(Self::Texts(v)),
            ArrayInput::Numbers(v) => Ok(Self::Numbers(v)),
            ArrayInput::Bools(_) => Err(Error::UnsupportedElement {
                index: 0,
                found: "a boolean",
                allowed: "a string or number",
            }),
        }
    }
}

impl<'de> Deserialize<'de> for UniqueValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl From<Vec<String>> for UniqueValues {
    fn from(v: Vec<String>) -> Self {
        Self::Texts(v)
    }
}

impl From<Vec<f64>> for UniqueValues {
    fn from(v: Vec<f64>) -> Self {
        Self::Numbers(v)
    }
}

/// Human-readable name of a JSON value's type, for error messages.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
