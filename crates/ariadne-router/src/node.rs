//! Segment trie.
//!
//! Each node has literal children keyed by segment text, at most one
//! dynamic child shared by every placeholder at that depth, and the
//! method slots of the routes that end there. Placeholder names are not
//! part of the trie: `/a/{x}` and `/a/{y}` occupy the same position.

use serde::{Deserialize, Serialize};

use crate::method_router::MethodRouter;
use crate::pattern::{split_path, Segment};
use crate::table::HandlerRef;
use http::Method;

/// A node in the segment trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The literal this node is reached by; empty for the root and for
    /// dynamic children.
    pub segment: String,

    /// Method slots for routes ending at this node.
    pub methods: Option<MethodRouter>,

    /// Literal children, sorted by segment for binary search.
    pub static_children: Vec<Node>,

    /// Placeholder child (at most one per node).
    pub dynamic_child: Option<Box<Node>>,
}

impl Node {
    /// Creates a literal node.
    #[must_use]
    pub fn new_static(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            ..Self::default()
        }
    }

    /// Creates the root node.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Inserts `handler` for `method` at the position described by
    /// `segments`, creating nodes along the way.
    ///
    /// Returns the handler already occupying that slot, if any.
    pub(crate) fn insert(
        &mut self,
        segments: &[Segment],
        method: &Method,
        handler: HandlerRef,
    ) -> Result<(), HandlerRef> {
        let Some((first, remaining)) = segments.split_first() else {
            return self
                .methods
                .get_or_insert_with(MethodRouter::new)
                .insert(method, handler);
        };

        let child = match first {
            Segment::Static(literal) => {
                let index = match self
                    .static_children
                    .binary_search_by(|c| c.segment.as_str().cmp(literal))
                {
                    Ok(index) => index,
                    Err(index) => {
                        self.static_children
                            .insert(index, Node::new_static(literal.clone()));
                        index
                    }
                };
                &mut self.static_children[index]
            }
            Segment::Dynamic(_) => self.dynamic_child.get_or_insert_with(Box::default).as_mut(),
        };
        child.insert(remaining, method, handler)
    }

    /// Matches a request path against the trie.
    ///
    /// Returns the method slots of the matched position and the captured
    /// placeholder values in path order.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<(&MethodRouter, Vec<String>)> {
        let segments: Vec<&str> = split_path(path).collect();
        let mut captured = Vec::new();
        self.match_segments(&segments, &mut captured)
            .map(|methods| (methods, captured))
    }

    /// Depth-first walk. A literal child is tried first; if that whole
    /// sub-walk dead-ends the dynamic child is tried from this same
    /// depth. `captured` holds the match's values on success and is
    /// restored to its entry state on failure.
    fn match_segments<'a>(
        &'a self,
        segments: &[&str],
        captured: &mut Vec<String>,
    ) -> Option<&'a MethodRouter> {
        let Some((segment, remaining)) = segments.split_first() else {
            return self.methods.as_ref().filter(|m| m.has_any_method());
        };

        if let Some(child) = self.find_static_child(segment) {
            if let Some(methods) = child.match_segments(remaining, captured) {
                return Some(methods);
            }
        }

        if let Some(child) = &self.dynamic_child {
            captured.push((*segment).to_string());
            if let Some(methods) = child.match_segments(remaining, captured) {
                return Some(methods);
            }
            captured.pop();
        }

        None
    }

    /// Finds a literal child using binary search.
    fn find_static_child(&self, segment: &str) -> Option<&Node> {
        self.static_children
            .binary_search_by(|c| c.segment.as_str().cmp(segment))
            .ok()
            .map(|i| &self.static_children[i])
    }

    /// Counts the nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .static_children
            .iter()
            .map(Node::node_count)
            .sum::<usize>()
            + self.dynamic_child.as_ref().map_or(0, |c| c.node_count())
    }
}
