//! The payload handed to a handler invoker.

use ariadne_router::{Attributes, HandlerRef, ParamValue, RouteLocation, Target};
use indexmap::IndexMap;

use crate::body::BodyValue;

/// A bound handler argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Coerced path segment value.
    Segment(ParamValue),
    /// Coerced query value, `None` when the key is absent.
    Query(Option<ParamValue>),
    /// Decoded request body.
    Body(BodyValue),
    /// Placeholder for the request handle.
    Request,
    /// Placeholder for a fresh response handle.
    Response,
}

impl Argument {
    /// Returns the scalar value of a segment or present query argument.
    #[must_use]
    pub fn value(&self) -> Option<&ParamValue> {
        match self {
            Self::Segment(value) | Self::Query(Some(value)) => Some(value),
            _ => None,
        }
    }
}

/// A matched request, ready to be invoked.
///
/// `args` holds one entry per declared handler parameter, keyed by name,
/// in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Handler table index of the matched route.
    pub handler: HandlerRef,
    /// Handler and method to call.
    pub target: Target,
    /// Route attributes.
    pub attributes: Attributes,
    /// Bound arguments.
    pub args: IndexMap<String, Argument>,
    /// Name and parameters of the matched route, when it is named.
    pub location: Option<RouteLocation>,
}

impl Invocation {
    /// Returns the argument bound to `name`.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&Argument> {
        self.args.get(name)
    }

    /// Returns the scalar value bound to `name`.
    ///
    /// `None` for body and handle arguments, and for absent query keys.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.arg(name).and_then(Argument::value)
    }

    /// Returns the decoded body bound to `name`.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<&BodyValue> {
        match self.arg(name) {
            Some(Argument::Body(body)) => Some(body),
            _ => None,
        }
    }
}
