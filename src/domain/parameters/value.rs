//! Scalar parameter values and their canonical string form.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single scalar value carried in a [`ParameterBag`](super::ParameterBag).
///
/// Values arrive either as decoded form/query strings or as typed values set
/// by the merchant backend (amounts in minor units are integers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Explicitly unset value.
    Null,
    /// Integer value, e.g. an amount in minor units.
    Integer(i64),
    /// Free text value.
    Text(String),
}

impl ParameterValue {
    /// Returns the canonical string form used as hash input.
    ///
    /// `Null` is the empty string. Integer zero and the string `"0"` both
    /// yield `"0"`.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            ParameterValue::Null => Cow::Borrowed(""),
            ParameterValue::Integer(value) => Cow::Owned(value.to_string()),
            ParameterValue::Text(value) => Cow::Borrowed(value.as_str()),
        }
    }

    /// Returns true if the canonical form is the empty string.
    pub fn is_empty(&self) -> bool {
        self.canonical().is_empty()
    }

    /// Returns true for an explicit `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }

    /// Interprets the value as an integer.
    ///
    /// Text is parsed after trimming surrounding whitespace.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParameterValue::Null => None,
            ParameterValue::Integer(value) => Some(*value),
            ParameterValue::Text(value) => value.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        ParameterValue::Text(value.clone())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl<T: Into<ParameterValue>> From<Option<T>> for ParameterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParameterValue::Null)
    }
}
