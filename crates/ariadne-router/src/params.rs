//! Raw captured segment values, keyed by placeholder name.
//!
//! The trie captures values positionally. [`Params`] pairs them back up
//! with the names the matched handler's SEGMENT bindings use, via each
//! binding's `segment_index`.

use smallvec::SmallVec;

use crate::param::ParamKind;
use crate::table::HandlerEntry;

/// Maximum number of parameters stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

/// Raw segment values of a route match, in placeholder order.
///
/// # Example
///
/// ```rust
/// use ariadne_router::Params;
///
/// let mut params = Params::new();
/// params.push("userId", "123");
///
/// assert_eq!(params.get("userId"), Some("123"));
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl Params {
    /// Creates a new empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names positional captures using the entry's SEGMENT bindings.
    ///
    /// Pairs are ordered by placeholder position, not by argument order.
    #[must_use]
    pub fn from_captures(entry: &HandlerEntry, captured: Vec<String>) -> Self {
        let mut named: Vec<Option<&str>> = vec![None; captured.len()];
        for binding in entry.bindings_of(ParamKind::Segment) {
            if let Some(slot) = binding.segment_index.and_then(|i| named.get_mut(i)) {
                *slot = Some(binding.name.as_str());
            }
        }

        captured
            .into_iter()
            .zip(named)
            .filter_map(|(value, name)| name.map(|n| (n.to_string(), value)))
            .collect()
    }

    /// Adds a parameter to the set.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the raw value for a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Attributes, Target};
    use crate::param::ParamBinding;
    use crate::value::ParamType;

    fn segment(name: &str, index: usize) -> ParamBinding {
        ParamBinding {
            name: name.to_string(),
            kind: ParamKind::Segment,
            ty: Some(ParamType::String),
            segment_index: Some(index),
        }
    }

    fn entry(bindings: Vec<ParamBinding>) -> HandlerEntry {
        HandlerEntry {
            target: Target::new("Ctrl", "m"),
            route: "/{greeting}/{title}/{name}".to_string(),
            bindings,
            attributes: Attributes::new(),
            name: None,
        }
    }

    #[test]
    fn test_from_captures_uses_placeholder_order() {
        let entry = entry(vec![
            segment("name", 2),
            segment("greeting", 0),
            segment("title", 1),
        ]);
        let params = Params::from_captures(
            &entry,
            vec!["welcome".into(), "noble".into(), "knight".into()],
        );

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("greeting", "welcome"), ("title", "noble"), ("name", "knight")]
        );
    }

    #[test]
    fn test_from_captures_ignores_other_kinds() {
        let mut bindings = vec![segment("id", 0)];
        bindings.push(ParamBinding {
            name: "active".to_string(),
            kind: ParamKind::Query,
            ty: Some(ParamType::Bool),
            segment_index: None,
        });
        let params = Params::from_captures(&entry(bindings), vec!["7".into()]);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("active"), None);
    }

    #[test]
    fn test_push_beyond_inline_capacity() {
        let mut params = Params::new();
        for i in 0..10 {
            params.push(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(params.len(), 10);
        assert_eq!(params.get("key5"), Some("value5"));
    }

    #[test]
    fn test_empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.iter().count(), 0);
    }
}
