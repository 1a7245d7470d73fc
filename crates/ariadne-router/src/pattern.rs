//! Path pattern parsing.
//!
//! A pattern such as `/users/{id}/roles` is split on `/` into an ordered
//! list of [`Segment`]s. Empty segments are dropped, so leading, trailing
//! and repeated slashes all normalise away.

use serde::{Deserialize, Serialize};

/// One `/`-delimited component of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Matched by exact literal equality (e.g. `users`).
    Static(String),
    /// Named placeholder whose value is captured at match time (e.g. `{id}`).
    Dynamic(String),
}

impl Segment {
    /// Parses a single non-empty segment.
    ///
    /// Only a segment that both starts with `{` and ends with `}` is a
    /// placeholder. Anything else, including half-open braces such as
    /// `{id` or `x{id}`, is kept verbatim as a literal.
    // TODO: revisit whether malformed placeholders should be rejected at
    // compile time instead of silently becoming literals.
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => Self::Dynamic(name.to_string()),
            None => Self::Static(raw.to_string()),
        }
    }

    /// Returns true for a placeholder segment.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

/// An ordered sequence of [`Segment`]s parsed from a route path.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{PathPattern, Segment};
///
/// let pattern = PathPattern::parse("/users/{id}/roles/");
/// assert_eq!(
///     pattern.segments(),
///     &[
///         Segment::Static("users".into()),
///         Segment::Dynamic("id".into()),
///         Segment::Static("roles".into()),
///     ]
/// );
/// assert_eq!(pattern.dynamic_names().collect::<Vec<_>>(), vec!["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a path pattern. Never fails.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        Self {
            segments: split_path(pattern).map(Segment::parse).collect(),
        }
    }

    /// Returns the parsed segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the placeholder names in order of appearance.
    pub fn dynamic_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Dynamic(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Returns the position of a placeholder among the placeholders only.
    #[must_use]
    pub fn dynamic_index(&self, name: &str) -> Option<usize> {
        self.dynamic_names().position(|n| n == name)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root pattern (`/` or the empty string).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Splits a path on `/`, skipping empty components.
///
/// Shared by pattern parsing and request matching so both sides normalise
/// slashes identically.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(s: &str) -> Segment {
        Segment::Static(s.to_string())
    }

    fn dynamic(s: &str) -> Segment {
        Segment::Dynamic(s.to_string())
    }

    #[test]
    fn test_parse_static() {
        let pattern = PathPattern::parse("/users/list");
        assert_eq!(pattern.segments(), &[stat("users"), stat("list")]);
    }

    #[test]
    fn test_parse_placeholders() {
        let pattern = PathPattern::parse("/orgs/{org}/users/{user}");
        assert_eq!(
            pattern.segments(),
            &[stat("orgs"), dynamic("org"), stat("users"), dynamic("user")]
        );
        assert_eq!(pattern.dynamic_index("user"), Some(1));
        assert_eq!(pattern.dynamic_index("missing"), None);
    }

    #[test]
    fn test_parse_normalises_slashes() {
        let a = PathPattern::parse("//hello///greet/{name}/");
        let b = PathPattern::parse("hello/greet/{name}");
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_parse_root() {
        assert!(PathPattern::parse("/").is_empty());
        assert!(PathPattern::parse("").is_empty());
    }

    #[test]
    fn test_malformed_placeholder_is_literal() {
        let pattern = PathPattern::parse("/{id/x{y}/{z}}");
        assert_eq!(
            pattern.segments(),
            &[stat("{id"), stat("x{y}"), dynamic("z}")]
        );
    }

    #[test]
    fn test_literal_taken_verbatim() {
        let pattern = PathPattern::parse("/a%20b/*rest");
        assert_eq!(pattern.segments(), &[stat("a%20b"), stat("*rest")]);
    }

    #[test]
    fn test_split_path() {
        let parts: Vec<_> = split_path("/a//b/").collect();
        assert_eq!(parts, vec!["a", "b"]);
    }
}
