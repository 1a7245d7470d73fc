//! Body parameter decoding.

use ariadne_router::ParamType;
use bytes::Bytes;

use crate::error::{DispatchError, ValueSource};

/// A decoded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyValue {
    /// The body as text, for `string` body parameters.
    Text(String),
    /// The body parsed as JSON, for structured body parameters.
    Json(serde_json::Value),
}

impl BodyValue {
    /// Returns the text, if this is a `string` body.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Returns the parsed JSON, if this is a structured body.
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Decodes `body` for the body parameter `param` of type `ty`.
///
/// # Errors
///
/// - [`DispatchError::MissingBody`] if `body` is empty;
/// - [`DispatchError::BadRequest`] if a structured body is not valid JSON
///   or a `string` body is not valid UTF-8.
pub fn decode_body(param: &str, ty: ParamType, body: &Bytes) -> Result<BodyValue, DispatchError> {
    if body.is_empty() {
        return Err(DispatchError::MissingBody {
            param: param.to_string(),
        });
    }

    match ty {
        ParamType::Structured => serde_json::from_slice(body)
            .map(BodyValue::Json)
            .map_err(|e| {
                DispatchError::bad_request(ValueSource::Body, param, format!("body parse error: {e}"))
            }),
        _ => String::from_utf8(body.to_vec())
            .map(BodyValue::Text)
            .map_err(|_| DispatchError::bad_request(ValueSource::Body, param, "body is not valid UTF-8")),
    }
}
