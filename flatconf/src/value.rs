//! Scalar leaf values held by the flat store.

use std::fmt;
use std::num::FpCategory;

use serde_json::{Number, Value as JsonValue};

/// A scalar leaf of the flattened configuration space.
///
/// Values parsed from files keep their native type; values mapped from the
/// environment are always [`FlatValue::String`] until coerced.
#[derive(Clone, Debug, PartialEq)]
pub enum FlatValue {
    /// Textual value.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl FlatValue {
    /// Convert a scalar document node into a flat value.
    ///
    /// Returns `None` for `null`, arrays and objects. Unsigned integers that do
    /// not fit in `i64` are kept as their decimal text so no precision is lost.
    #[must_use]
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(s) => Some(Self::String(s.clone())),
            JsonValue::Bool(b) => Some(Self::Bool(*b)),
            JsonValue::Number(n) => Some(Self::from_number(n)),
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }

    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            Self::Integer(i)
        } else if n.is_u64() {
            Self::String(n.to_string())
        } else {
            n.as_f64()
                .map_or_else(|| Self::String(n.to_string()), Self::Float)
        }
    }

    /// Convert back into a document scalar.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Integer(i) => JsonValue::from(*i),
            Self::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
            Self::Bool(b) => JsonValue::Bool(*b),
        }
    }

    /// Borrow the text of a [`FlatValue::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for the zero value of the variant: `""`, `0`, `0.0`
    /// (either sign) or `false`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Integer(i) => *i == 0,
            Self::Float(f) => f.classify() == FpCategory::Zero,
            Self::Bool(b) => !*b,
        }
    }

    /// Name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

/// Renders the canonical, locale-independent text of the value.
///
/// Floats use the shortest representation that round-trips, so `35.0`
/// renders as `35` and `6.65` as `6.65`.
impl fmt::Display for FlatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for FlatValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for FlatValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for FlatValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FlatValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FlatValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
