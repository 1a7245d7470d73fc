//! The flat handler table.
//!
//! Every compiled route owns exactly one [`HandlerEntry`]. The trie and
//! the name index refer to entries by [`HandlerRef`], so per-route
//! metadata is stored once.

use serde::{Deserialize, Serialize};

use crate::declaration::{Attributes, Target};
use crate::param::{ParamBinding, ParamKind};

/// Stable index of an entry in the handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerRef(pub(crate) usize);

impl HandlerRef {
    /// Returns the raw table index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Compiled metadata for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerEntry {
    /// Handler the route resolves to.
    pub target: Target,
    /// The route's path pattern as declared.
    pub route: String,
    /// Classified handler arguments in declaration order.
    pub bindings: Vec<ParamBinding>,
    /// Merged route attributes.
    pub attributes: Attributes,
    /// Route name, if any.
    pub name: Option<String>,
}

impl HandlerEntry {
    /// Returns the bindings of the given kind, in declaration order.
    pub fn bindings_of(&self, kind: ParamKind) -> impl Iterator<Item = &ParamBinding> {
        self.bindings.iter().filter(move |b| b.kind == kind)
    }
}
