//! Route declarations: the compiler's input.
//!
//! A [`RouteDeclaration`] is one endpoint as found by whatever discovery
//! mechanism the host uses. [`Controller`] is a convenience for the
//! common case of several endpoints sharing a handler, a path prefix and
//! a set of route attributes.

use std::fmt;

use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::param::ParamDescriptor;

/// Opaque key/value metadata attached to a route.
pub type Attributes = IndexMap<String, serde_json::Value>;

/// The handler a route resolves to: an opaque handler identifier plus the
/// method to call on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Handler identifier (e.g. a controller type name).
    pub handler: String,
    /// Method name on the handler.
    pub method: String,
}

impl Target {
    /// Creates a new target.
    #[must_use]
    pub fn new(handler: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.handler, self.method)
    }
}

/// One declared endpoint.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{DeclaredType, ParamDescriptor, RouteDeclaration, Target};
/// use http::Method;
///
/// let decl = RouteDeclaration::new(Method::GET, "/user/{id}", Target::new("User", "get_user"))
///     .name("user.get")
///     .param(ParamDescriptor::new("id", DeclaredType::Int))
///     .attribute("auth", true);
///
/// assert_eq!(decl.name.as_deref(), Some("user.get"));
/// assert_eq!(decl.attributes["auth"], true);
/// ```
#[derive(Debug, Clone)]
pub struct RouteDeclaration {
    /// HTTP method.
    pub method: Method,
    /// Path pattern, e.g. `/users/{id}`.
    pub path: String,
    /// Route name for reverse routing.
    pub name: Option<String>,
    /// Handler arguments in declaration order.
    pub params: Vec<ParamDescriptor>,
    /// Route metadata.
    pub attributes: Attributes,
    /// Handler the route resolves to.
    pub target: Target,
}

impl RouteDeclaration {
    /// Creates a declaration with no name, parameters or attributes.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, target: Target) -> Self {
        Self {
            method,
            path: path.into(),
            name: None,
            params: Vec::new(),
            attributes: Attributes::new(),
            target,
        }
    }

    /// Sets the route name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a handler argument.
    #[must_use]
    pub fn param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Sets a route attribute, replacing any previous value for `key`.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// An endpoint of a [`Controller`], relative to its prefix.
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    path: String,
    handler_method: String,
    name: Option<String>,
    params: Vec<ParamDescriptor>,
    attributes: Attributes,
}

impl Endpoint {
    /// Creates an endpoint calling `handler_method` for `method` + `path`.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, handler_method: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            handler_method: handler_method.into(),
            name: None,
            params: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// Shorthand for a GET endpoint.
    #[must_use]
    pub fn get(path: impl Into<String>, handler_method: impl Into<String>) -> Self {
        Self::new(Method::GET, path, handler_method)
    }

    /// Shorthand for a POST endpoint.
    #[must_use]
    pub fn post(path: impl Into<String>, handler_method: impl Into<String>) -> Self {
        Self::new(Method::POST, path, handler_method)
    }

    /// Shorthand for a PUT endpoint.
    #[must_use]
    pub fn put(path: impl Into<String>, handler_method: impl Into<String>) -> Self {
        Self::new(Method::PUT, path, handler_method)
    }

    /// Shorthand for a DELETE endpoint.
    #[must_use]
    pub fn delete(path: impl Into<String>, handler_method: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, handler_method)
    }

    /// Sets the route name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a handler argument.
    #[must_use]
    pub fn param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Sets an endpoint-level attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A group of endpoints sharing a handler, a path prefix and attributes.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{Controller, DeclaredType, Endpoint, ParamDescriptor};
///
/// let decls = Controller::new("HelloCtrl")
///     .prefix("/hello")
///     .attribute("ctrl_specific", true)
///     .endpoint(
///         Endpoint::get("greet/{name}", "say_hello")
///             .param(ParamDescriptor::new("name", DeclaredType::String)),
///     )
///     .into_declarations();
///
/// assert_eq!(decls[0].path, "/hello/greet/{name}");
/// assert_eq!(decls[0].target.to_string(), "HelloCtrl::say_hello");
/// assert_eq!(decls[0].attributes["ctrl_specific"], true);
/// ```
#[derive(Debug, Clone)]
pub struct Controller {
    handler: String,
    prefix: String,
    attributes: Attributes,
    endpoints: Vec<Endpoint>,
}

impl Controller {
    /// Creates a controller for the given handler identifier.
    #[must_use]
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            prefix: String::new(),
            attributes: Attributes::new(),
            endpoints: Vec::new(),
        }
    }

    /// Sets the path prefix shared by every endpoint.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets a controller-level attribute. Endpoint attributes with the
    /// same key take precedence.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Adds an endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Flattens the controller into one declaration per endpoint.
    #[must_use]
    pub fn into_declarations(self) -> Vec<RouteDeclaration> {
        let Self {
            handler,
            prefix,
            attributes,
            endpoints,
        } = self;

        endpoints
            .into_iter()
            .map(|endpoint| {
                let path = if prefix.is_empty() {
                    endpoint.path
                } else {
                    format!("{prefix}/{}", endpoint.path)
                };
                let mut merged = attributes.clone();
                merged.extend(endpoint.attributes);

                RouteDeclaration {
                    method: endpoint.method,
                    path,
                    name: endpoint.name,
                    params: endpoint.params,
                    attributes: merged,
                    target: Target::new(handler.clone(), endpoint.handler_method),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::DeclaredType;

    #[test]
    fn test_declaration_builder() {
        let decl = RouteDeclaration::new(Method::POST, "/user", Target::new("User", "add_user"))
            .param(ParamDescriptor::new("user", DeclaredType::Structured).body())
            .attribute("a", "b");

        assert_eq!(decl.method, Method::POST);
        assert_eq!(decl.params.len(), 1);
        assert_eq!(decl.attributes["a"], "b");
        assert!(decl.name.is_none());
    }

    #[test]
    fn test_controller_prefix_join() {
        let decls = Controller::new("Ctrl")
            .prefix("/hello")
            .endpoint(Endpoint::post("/validate-long-message", "validate"))
            .endpoint(Endpoint::get("noop", "noop"))
            .into_declarations();

        assert_eq!(decls[0].path, "/hello//validate-long-message");
        assert_eq!(decls[1].path, "/hello/noop");
        assert_eq!(decls[1].method, Method::GET);
    }

    #[test]
    fn test_controller_without_prefix() {
        let decls = Controller::new("Ctrl")
            .endpoint(Endpoint::delete("user/{id}", "remove"))
            .into_declarations();
        assert_eq!(decls[0].path, "user/{id}");
    }

    #[test]
    fn test_attribute_merge_order() {
        let decls = Controller::new("Ctrl")
            .attribute("auth", true)
            .attribute("scope", "ctrl")
            .endpoint(
                Endpoint::put("x", "x")
                    .attribute("scope", "endpoint")
                    .attribute("no_csrf", true),
            )
            .into_declarations();

        let attrs = &decls[0].attributes;
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["auth", "scope", "no_csrf"]);
        assert_eq!(attrs["scope"], "endpoint");
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::new("A", "b").to_string(), "A::b");
    }
}
