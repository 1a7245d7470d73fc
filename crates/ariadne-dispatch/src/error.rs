//! Request-time dispatch errors.
//!
//! Every variant is a client-facing outcome with a fixed HTTP status.
//! Compile-time faults never reach this type; they abort startup in
//! [`ariadne_router::CompileError`].

use std::fmt;

use ariadne_router::{CoerceError, MatchError};
use http::{HeaderValue, Method, StatusCode};
use thiserror::Error;

/// Where a rejected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// A dynamic path segment.
    Segment,
    /// The query string.
    Query,
    /// The request body.
    Body,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment => write!(f, "segment"),
            Self::Query => write!(f, "query"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Why a request could not be turned into an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No route matches the path.
    #[error("not found")]
    NotFound,

    /// A route matches the path, but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed {
        /// Methods registered for the matched path.
        allowed: Vec<Method>,
    },

    /// A value could not be converted to its declared type.
    #[error("invalid {origin} parameter '{param}': {reason}")]
    BadRequest {
        /// Where the value came from.
        origin: ValueSource,
        /// Parameter name.
        param: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A body parameter is declared but the request body is empty.
    #[error("body not provided for parameter '{param}'")]
    MissingBody {
        /// Name of the body parameter.
        param: String,
    },
}

impl DispatchError {
    /// Creates a [`DispatchError::BadRequest`].
    #[must_use]
    pub fn bad_request(
        origin: ValueSource,
        param: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::BadRequest {
            origin,
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`DispatchError::BadRequest`] from a failed coercion.
    #[must_use]
    pub fn coercion(origin: ValueSource, param: impl Into<String>, err: &CoerceError) -> Self {
        Self::bad_request(origin, param, err.to_string())
    }

    /// Returns the HTTP status for this outcome.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest { .. } | Self::MissingBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns the error code suitable for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            Self::BadRequest { .. } => "INVALID_PARAMETER",
            Self::MissingBody { .. } => "MISSING_BODY",
        }
    }

    /// Returns the value of an `Allow` header for a 405 outcome.
    ///
    /// `None` for every other variant.
    #[must_use]
    pub fn allow_header(&self) -> Option<HeaderValue> {
        match self {
            Self::MethodNotAllowed { allowed } => {
                let joined = allowed
                    .iter()
                    .map(Method::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                HeaderValue::from_str(&joined).ok()
            }
            _ => None,
        }
    }
}

impl From<MatchError> for DispatchError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::NotFound => Self::NotFound,
            MatchError::MethodNotAllowed { allowed } => Self::MethodNotAllowed { allowed },
        }
    }
}
