//! The compiled, read-only route set.
//!
//! [`CompiledRoutes`] bundles the segment trie, the flat handler table
//! and the name index produced by [`crate::compile`]. It is never mutated
//! after compilation, so any number of threads can match against it
//! concurrently without locking.

use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::method_router::MethodRouter;
use crate::node::Node;
use crate::params::Params;
use crate::reverse::ReverseRouter;
use crate::table::{HandlerEntry, HandlerRef};

/// Reverse-routing template of a named route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseEntry {
    /// The route's handler table entry.
    pub handler: HandlerRef,
    /// One element per pattern segment: the literal, or `None` for a
    /// placeholder.
    pub template: Vec<Option<String>>,
}

/// A successful match: the handler plus its raw segment values.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    /// Index of the matched handler.
    pub handler: HandlerRef,
    /// The matched handler's compiled metadata.
    pub entry: &'a HandlerEntry,
    /// Raw segment values, keyed by placeholder name.
    pub params: Params,
}

/// Compiled routes: trie, handler table and name index.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{compile, DeclaredType, ParamDescriptor, RouteDeclaration, Target};
/// use http::Method;
///
/// let routes = compile(vec![
///     RouteDeclaration::new(Method::GET, "/users/{id}", Target::new("Users", "show"))
///         .param(ParamDescriptor::new("id", DeclaredType::Int)),
/// ])
/// .unwrap();
///
/// let found = routes.match_route(&Method::GET, "/users/123").unwrap();
/// assert_eq!(found.entry.target.method, "show");
/// assert_eq!(found.params.get("id"), Some("123"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledRoutes {
    root: Node,
    handlers: Vec<HandlerEntry>,
    names: IndexMap<String, ReverseEntry>,
}

impl CompiledRoutes {
    pub(crate) fn from_parts(
        root: Node,
        handlers: Vec<HandlerEntry>,
        names: IndexMap<String, ReverseEntry>,
    ) -> Self {
        Self {
            root,
            handlers,
            names,
        }
    }

    /// Matches a path without looking at the method.
    ///
    /// Returns the method slots at the matched position and the captured
    /// segment values in path order.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<(&MethodRouter, Vec<String>)> {
        self.root.match_path(path)
    }

    /// Matches a request, treating `HEAD` as `GET`.
    ///
    /// # Errors
    ///
    /// [`MatchError::NotFound`] if no position matches the path, and
    /// [`MatchError::MethodNotAllowed`] if one does but has no handler
    /// for `method`.
    pub fn match_route(&self, method: &Method, path: &str) -> Result<RouteMatch<'_>, MatchError> {
        self.match_route_with(method, path, true)
    }

    /// Matches a request. With `head_as_get`, `HEAD` is looked up in the
    /// `GET` slot and reported as allowed wherever `GET` is.
    ///
    /// # Errors
    ///
    /// See [`Self::match_route`].
    pub fn match_route_with(
        &self,
        method: &Method,
        path: &str,
        head_as_get: bool,
    ) -> Result<RouteMatch<'_>, MatchError> {
        let (methods, captured) = self.match_path(path).ok_or(MatchError::NotFound)?;

        let lookup = if head_as_get && *method == Method::HEAD {
            &Method::GET
        } else {
            method
        };

        let Some(handler) = methods.get_handler(lookup) else {
            let mut allowed = methods.allowed_methods();
            if head_as_get && allowed.contains(&Method::GET) && !allowed.contains(&Method::HEAD) {
                allowed.push(Method::HEAD);
            }
            return Err(MatchError::MethodNotAllowed { allowed });
        };

        let entry = self.handler(handler).ok_or(MatchError::NotFound)?;
        Ok(RouteMatch {
            handler,
            entry,
            params: Params::from_captures(entry, captured),
        })
    }

    /// Returns a handler table entry.
    #[must_use]
    pub fn handler(&self, handler: HandlerRef) -> Option<&HandlerEntry> {
        self.handlers.get(handler.index())
    }

    /// Returns every handler table entry in declaration order.
    #[must_use]
    pub fn handlers(&self) -> &[HandlerEntry] {
        &self.handlers
    }

    /// Returns the reverse-routing entry registered under `name`.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&ReverseEntry> {
        self.names.get(name)
    }

    /// Returns a URL generator over these routes.
    #[must_use]
    pub fn reverse(&self) -> ReverseRouter<'_> {
        ReverseRouter::new(self)
    }

    /// Returns the number of compiled routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no routes were compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the number of named routes.
    #[must_use]
    pub fn named_len(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of trie nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::declaration::{RouteDeclaration, Target};
    use crate::param::{DeclaredType, ParamDescriptor};

    fn routes() -> CompiledRoutes {
        compile(vec![
            RouteDeclaration::new(Method::GET, "/users", Target::new("Users", "list")),
            RouteDeclaration::new(Method::POST, "/users", Target::new("Users", "create")),
            RouteDeclaration::new(Method::GET, "/users/{id}", Target::new("Users", "show"))
                .name("users.show")
                .param(ParamDescriptor::new("id", DeclaredType::Int)),
            RouteDeclaration::new(Method::DELETE, "/users/{id}", Target::new("Users", "remove"))
                .param(ParamDescriptor::new("id", DeclaredType::Int)),
        ])
        .unwrap()
    }

    #[test]
    fn test_match_static_and_dynamic() {
        let routes = routes();

        let list = routes.match_route(&Method::GET, "/users").unwrap();
        assert_eq!(list.entry.target.method, "list");
        assert!(list.params.is_empty());

        let show = routes.match_route(&Method::GET, "/users/42").unwrap();
        assert_eq!(show.entry.target.method, "show");
        assert_eq!(show.params.get("id"), Some("42"));
        assert_eq!(routes.handler(show.handler), Some(show.entry));
    }

    #[test]
    fn test_not_found_and_method_not_allowed_are_distinct() {
        let routes = routes();

        assert_eq!(
            routes.match_route(&Method::GET, "/posts").unwrap_err(),
            MatchError::NotFound
        );
        assert_eq!(
            routes.match_route(&Method::PUT, "/users").unwrap_err(),
            MatchError::MethodNotAllowed {
                allowed: vec![Method::GET, Method::POST, Method::HEAD]
            }
        );
    }

    #[test]
    fn test_head_matches_get_routes() {
        let routes = routes();

        let head = routes.match_route(&Method::HEAD, "/users/7").unwrap();
        let get = routes.match_route(&Method::GET, "/users/7").unwrap();
        assert_eq!(head.handler, get.handler);
    }

    #[test]
    fn test_head_without_head_as_get() {
        let routes = routes();

        let err = routes
            .match_route_with(&Method::HEAD, "/users", false)
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::MethodNotAllowed {
                allowed: vec![Method::GET, Method::POST]
            }
        );
    }

    #[test]
    fn test_counts() {
        let routes = routes();
        assert_eq!(routes.len(), 4);
        assert!(!routes.is_empty());
        assert_eq!(routes.named_len(), 1);
        assert!(routes.named("users.show").is_some());
        assert!(routes.named("users.list").is_none());
        // root, "users", {id}
        assert_eq!(routes.node_count(), 3);
    }

    #[test]
    fn test_serde_round_trip_preserves_matching() {
        let routes = routes();
        let json = serde_json::to_string(&routes).unwrap();
        let restored: CompiledRoutes = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, routes);
        let found = restored.match_route(&Method::DELETE, "/users/9").unwrap();
        assert_eq!(found.entry.target.method, "remove");
    }

    #[test]
    fn test_handler_index_past_table_is_not_found() {
        let mut value = serde_json::to_value(routes()).unwrap();
        value["handlers"].as_array_mut().unwrap().truncate(3);
        let truncated: CompiledRoutes = serde_json::from_value(value).unwrap();

        assert_eq!(truncated.len(), 3);
        assert_eq!(
            truncated.match_route(&Method::DELETE, "/users/9").unwrap_err(),
            MatchError::NotFound
        );
        assert!(truncated.match_route(&Method::GET, "/users/9").is_ok());
    }
}
