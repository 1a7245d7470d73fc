//! Scalar parameter values and string coercion.
//!
//! Raw segment and query values always arrive as strings. [`coerce`]
//! turns them into a [`ParamValue`] according to the binding's
//! [`ParamType`]; [`ParamValue`]'s `Display` goes the other way when a
//! URL is generated.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared type of a bound parameter after classification.
///
/// REQUEST/RESPONSE bindings carry no type at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// Passed through unchanged.
    String,
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// `true`/`1` or `false`/`0`.
    Bool,
    /// JSON array or object, only valid for body parameters.
    Structured,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Structured => "array",
        };
        f.write_str(name)
    }
}

/// A coerced scalar value for a segment or query parameter.
///
/// # Example
///
/// ```rust
/// use ariadne_router::ParamValue;
///
/// assert_eq!(ParamValue::from(true).to_string(), "true");
/// assert_eq!(ParamValue::from(42).to_string(), "42");
/// assert_eq!(ParamValue::from("abc").to_string(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean value, rendered as `true`/`false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
}

impl ParamValue {
    /// Returns the string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A raw string that could not be coerced to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {expected} value '{raw}'")]
pub struct CoerceError {
    /// The type the value should have had.
    pub expected: ParamType,
    /// The offending raw value.
    pub raw: String,
}

/// Coerces a raw segment or query string to `ty`.
///
/// Booleans accept exactly `true`/`1` and `false`/`0`. Structured values
/// are never raw strings and always fail here; bodies are decoded by the
/// dispatcher.
///
/// ```rust
/// use ariadne_router::{coerce, ParamType, ParamValue};
///
/// assert_eq!(coerce("1", ParamType::Bool).unwrap(), ParamValue::Bool(true));
/// assert!(coerce("yes", ParamType::Bool).is_err());
/// assert_eq!(coerce("-7", ParamType::Int).unwrap(), ParamValue::Int(-7));
/// ```
pub fn coerce(raw: &str, ty: ParamType) -> Result<ParamValue, CoerceError> {
    let invalid = || CoerceError {
        expected: ty,
        raw: raw.to_string(),
    };
    match ty {
        ParamType::String => Ok(ParamValue::String(raw.to_string())),
        ParamType::Int => raw.parse().map(ParamValue::Int).map_err(|_| invalid()),
        ParamType::Float => raw.parse().map(ParamValue::Float).map_err(|_| invalid()),
        ParamType::Bool => match raw {
            "true" | "1" => Ok(ParamValue::Bool(true)),
            "false" | "0" => Ok(ParamValue::Bool(false)),
            _ => Err(invalid()),
        },
        ParamType::Structured => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_string_identity() {
        assert_eq!(
            coerce("hello world", ParamType::String).unwrap(),
            ParamValue::String("hello world".into())
        );
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce("42", ParamType::Int).unwrap(), ParamValue::Int(42));
        assert_eq!(coerce("-1", ParamType::Int).unwrap(), ParamValue::Int(-1));
        assert!(coerce("4x", ParamType::Int).is_err());
        assert!(coerce("", ParamType::Int).is_err());
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(
            coerce("2.5", ParamType::Float).unwrap(),
            ParamValue::Float(2.5)
        );
        assert!(coerce("two", ParamType::Float).is_err());
    }

    #[test]
    fn test_coerce_bool() {
        assert_eq!(coerce("true", ParamType::Bool).unwrap(), ParamValue::Bool(true));
        assert_eq!(coerce("1", ParamType::Bool).unwrap(), ParamValue::Bool(true));
        assert_eq!(coerce("false", ParamType::Bool).unwrap(), ParamValue::Bool(false));
        assert_eq!(coerce("0", ParamType::Bool).unwrap(), ParamValue::Bool(false));

        for bad in ["yes", "no", "TRUE", "", "2"] {
            let err = coerce(bad, ParamType::Bool).unwrap_err();
            assert_eq!(err.expected, ParamType::Bool);
            assert_eq!(err.raw, bad);
        }
    }

    #[test]
    fn test_coerce_structured_rejected() {
        assert!(coerce("[]", ParamType::Structured).is_err());
    }

    #[test]
    fn test_display_bool() {
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
        assert_eq!(ParamValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_error_message() {
        let err = coerce("maybe", ParamType::Bool).unwrap_err();
        assert_eq!(err.to_string(), "invalid bool value 'maybe'");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ParamValue::from("a").as_str(), Some("a"));
        assert_eq!(ParamValue::from(3).as_int(), Some(3));
        assert_eq!(ParamValue::from(false).as_bool(), Some(false));
        assert_eq!(ParamValue::from(1.5).as_float(), Some(1.5));
        assert_eq!(ParamValue::from(1).as_str(), None);
    }
}
