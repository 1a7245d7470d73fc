//! HTTP method slots for a single trie position.
//!
//! [`MethodRouter`] maps each standard HTTP method to at most one
//! [`HandlerRef`]. Filling an occupied slot is refused, which is how the
//! compiler detects duplicate `(path, method)` registrations.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::table::HandlerRef;

/// Maps HTTP methods to handler table entries for a single route path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRouter {
    /// GET handler
    get: Option<HandlerRef>,
    /// POST handler
    post: Option<HandlerRef>,
    /// PUT handler
    put: Option<HandlerRef>,
    /// DELETE handler
    delete: Option<HandlerRef>,
    /// PATCH handler
    patch: Option<HandlerRef>,
    /// HEAD handler
    head: Option<HandlerRef>,
    /// OPTIONS handler
    options: Option<HandlerRef>,
    /// TRACE handler
    trace: Option<HandlerRef>,
    /// CONNECT handler
    connect: Option<HandlerRef>,
}

impl MethodRouter {
    /// Creates a new empty method router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `method` has a slot here.
    #[must_use]
    pub fn supports(method: &Method) -> bool {
        matches!(
            *method,
            Method::GET
                | Method::POST
                | Method::PUT
                | Method::DELETE
                | Method::PATCH
                | Method::HEAD
                | Method::OPTIONS
                | Method::TRACE
                | Method::CONNECT
        )
    }

    fn slot_mut(&mut self, method: &Method) -> Option<&mut Option<HandlerRef>> {
        match *method {
            Method::GET => Some(&mut self.get),
            Method::POST => Some(&mut self.post),
            Method::PUT => Some(&mut self.put),
            Method::DELETE => Some(&mut self.delete),
            Method::PATCH => Some(&mut self.patch),
            Method::HEAD => Some(&mut self.head),
            Method::OPTIONS => Some(&mut self.options),
            Method::TRACE => Some(&mut self.trace),
            Method::CONNECT => Some(&mut self.connect),
            _ => None,
        }
    }

    /// Registers `handler` for `method`.
    ///
    /// Returns the already registered handler if the slot is taken.
    /// Non-standard methods are ignored; callers check [`Self::supports`]
    /// first.
    pub(crate) fn insert(&mut self, method: &Method, handler: HandlerRef) -> Result<(), HandlerRef> {
        if let Some(slot) = self.slot_mut(method) {
            if let Some(existing) = *slot {
                return Err(existing);
            }
            *slot = Some(handler);
        }
        Ok(())
    }

    /// Returns the handler registered for `method`.
    #[must_use]
    pub fn get_handler(&self, method: &Method) -> Option<HandlerRef> {
        match *method {
            Method::GET => self.get,
            Method::POST => self.post,
            Method::PUT => self.put,
            Method::DELETE => self.delete,
            Method::PATCH => self.patch,
            Method::HEAD => self.head,
            Method::OPTIONS => self.options,
            Method::TRACE => self.trace,
            Method::CONNECT => self.connect,
            _ => None,
        }
    }

    /// Returns true if any methods are registered.
    #[must_use]
    pub fn has_any_method(&self) -> bool {
        self.get.is_some()
            || self.post.is_some()
            || self.put.is_some()
            || self.delete.is_some()
            || self.patch.is_some()
            || self.head.is_some()
            || self.options.is_some()
            || self.trace.is_some()
            || self.connect.is_some()
    }

    /// Returns the registered methods, in a fixed order.
    #[must_use]
    pub fn allowed_methods(&self) -> Vec<Method> {
        [
            (Method::GET, self.get),
            (Method::POST, self.post),
            (Method::PUT, self.put),
            (Method::DELETE, self.delete),
            (Method::PATCH, self.patch),
            (Method::HEAD, self.head),
            (Method::OPTIONS, self.options),
            (Method::TRACE, self.trace),
            (Method::CONNECT, self.connect),
        ]
        .into_iter()
        .filter_map(|(method, slot)| slot.map(|_| method))
        .collect()
    }
}
