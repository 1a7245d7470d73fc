//! Error types for route compilation, matching and reverse routing.
//!
//! Compile errors are configuration mistakes and are meant to abort
//! startup. Match errors are ordinary request outcomes that map onto an
//! HTTP status. Reverse errors are programmer mistakes made by the caller
//! of [`crate::ReverseRouter`].

use http::{Method, StatusCode};
use thiserror::Error;

use crate::declaration::Target;
use crate::param::{DeclaredType, ParamKind};

/// Result type alias for route compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// A fatal error found while compiling route declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Two declarations claim the same route.
    ///
    /// Raised when two declarations occupy the same trie position for the
    /// same method (`name` is `None`), and when a route name is registered
    /// twice (`name` is the duplicated name). In both cases `method` and
    /// `route` describe the second declaration.
    #[error(
        "ambiguous route {method} {route}{}: {existing} and {conflicting} collide",
        .name.as_ref().map(|n| format!(" (name '{n}')")).unwrap_or_default()
    )]
    AmbiguousRoute {
        /// HTTP method of the second declaration.
        method: Method,
        /// Path pattern of the second declaration.
        route: String,
        /// The duplicated route name, for name collisions.
        name: Option<String>,
        /// Handler registered first.
        existing: Target,
        /// Handler that collided with it.
        conflicting: Target,
    },

    /// Placeholder names and SEGMENT parameter names differ.
    #[error(
        "inconsistent params for route {route} on {handler}: pattern has [{}], handler has [{}]",
        .expected.join(", "),
        .actual.join(", ")
    )]
    InconsistentParams {
        /// Path pattern.
        route: String,
        /// Handler the pattern is declared on.
        handler: Target,
        /// Placeholder names found in the pattern, sorted.
        expected: Vec<String>,
        /// SEGMENT parameter names found on the handler, sorted.
        actual: Vec<String>,
    },

    /// A parameter's declared type is not supported by its binding kind.
    #[error("invalid type '{declared}' for {kind} param '{param}' of {handler} ({route})")]
    InvalidParamType {
        /// Parameter name.
        param: String,
        /// Binding kind the parameter was classified as.
        kind: ParamKind,
        /// The rejected type.
        declared: DeclaredType,
        /// Handler the parameter belongs to.
        handler: Target,
        /// Path pattern.
        route: String,
    },

    /// The declaration set was empty.
    #[error("no controllers found: at least one route must be declared")]
    NoControllers,

    /// A route was declared for a method without a trie slot.
    #[error("unsupported method {method} for {handler} ({route})")]
    UnsupportedMethod {
        /// The declared method.
        method: Method,
        /// Handler the route resolves to.
        handler: Target,
        /// Path pattern.
        route: String,
    },
}

impl CompileError {
    /// Returns true for duplicate path or duplicate name errors.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousRoute { .. })
    }

    /// Returns the duplicated route name of a name collision.
    #[must_use]
    pub fn duplicate_name(&self) -> Option<&str> {
        match self {
            Self::AmbiguousRoute { name, .. } => name.as_deref(),
            _ => None,
        }
    }
}

/// A request path that did not resolve to a handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No trie position matches the path.
    #[error("no route matches the path")]
    NotFound,

    /// The path matches but no handler is registered for the method.
    #[error("method not allowed")]
    MethodNotAllowed {
        /// Methods registered at the matched position.
        allowed: Vec<Method>,
    },
}

impl MatchError {
    /// Returns the HTTP status code for this outcome.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// A failed URL generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    /// No route is registered under the name.
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    /// A segment value was not supplied.
    #[error("missing required param '{param}' for route '{route}'")]
    MissingRequiredParam {
        /// Route name.
        route: String,
        /// Parameter name.
        param: String,
    },

    /// A segment value is empty or contains `/`, `?` or `#`.
    #[error("invalid value '{value}' for segment param '{param}' of route '{route}'")]
    InvalidSegmentValue {
        /// Route name.
        route: String,
        /// Parameter name.
        param: String,
        /// The rendered value.
        value: String,
    },

    /// The query string could not be encoded.
    #[error("failed to encode query string: {0}")]
    QueryEncoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ambiguous() {
        let target = Target::new("A", "a");
        let route = CompileError::AmbiguousRoute {
            method: Method::GET,
            route: "/x".into(),
            name: None,
            existing: target.clone(),
            conflicting: Target::new("B", "b"),
        };
        let name = CompileError::AmbiguousRoute {
            method: Method::GET,
            route: "/y".into(),
            name: Some("x".into()),
            existing: target.clone(),
            conflicting: target,
        };

        assert!(route.is_ambiguous());
        assert!(name.is_ambiguous());
        assert!(!CompileError::NoControllers.is_ambiguous());
        assert_eq!(route.duplicate_name(), None);
        assert_eq!(name.duplicate_name(), Some("x"));
    }

    #[test]
    fn test_ambiguous_route_names_both_handlers() {
        let err = CompileError::AmbiguousRoute {
            method: Method::GET,
            route: "/greet/{who}".into(),
            name: None,
            existing: Target::new("Hello", "greet"),
            conflicting: Target::new("Hello", "greet2"),
        };
        let message = err.to_string();
        assert!(message.contains("Hello::greet "));
        assert!(message.contains("Hello::greet2"));
        assert!(!message.contains("name"));
    }

    #[test]
    fn test_ambiguous_name_message() {
        let err = CompileError::AmbiguousRoute {
            method: Method::GET,
            route: "/b".into(),
            name: Some("user.show".into()),
            existing: Target::new("User", "a"),
            conflicting: Target::new("User", "b"),
        };
        assert_eq!(
            err.to_string(),
            "ambiguous route GET /b (name 'user.show'): User::a and User::b collide"
        );
    }

    #[test]
    fn test_inconsistent_params_message() {
        let err = CompileError::InconsistentParams {
            route: "/a/{x}".into(),
            handler: Target::new("A", "a"),
            expected: vec!["x".into()],
            actual: vec!["x".into(), "y".into()],
        };
        assert_eq!(
            err.to_string(),
            "inconsistent params for route /a/{x} on A::a: pattern has [x], handler has [x, y]"
        );
    }

    #[test]
    fn test_match_error_status_codes() {
        assert_eq!(MatchError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            MatchError::MethodNotAllowed { allowed: vec![Method::GET] }.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
