//! Axis value - one possible value of a matrix axis

use serde::{Serialize, Serializer};

/// A single value an axis can take.
///
/// `Absent` is a first-class value: an axis declared as `py: ["3.9", null]`
/// produces combinations where `py` has no value, and selectors may target
/// that case explicitly with `py: null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisValue {
    Absent,
    Value(String),
}

impl AxisValue {
    pub fn value(value: impl Into<String>) -> Self {
        AxisValue::Value(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AxisValue::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AxisValue::Absent => None,
            AxisValue::Value(v) => Some(v),
        }
    }

    /// Parse a value from user input, where `null` and `~` denote absence.
    pub fn parse_literal(raw: &str) -> Self {
        match raw.trim() {
            "null" | "~" => AxisValue::Absent,
            other => AxisValue::Value(other.to_string()),
        }
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        AxisValue::Value(value.to_string())
    }
}

impl From<Option<String>> for AxisValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(AxisValue::Absent, AxisValue::Value)
    }
}

impl std::fmt::Display for AxisValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisValue::Absent => f.write_str("null"),
            AxisValue::Value(v) => f.write_str(v),
        }
    }
}

impl Serialize for AxisValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AxisValue::Absent => serializer.serialize_none(),
            AxisValue::Value(v) => serializer.serialize_str(v),
        }
    }
}
