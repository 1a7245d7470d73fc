//! Query string decoding.
//!
//! [`QueryParams`] holds the raw, percent-decoded key/value pairs of a
//! request's query string. Values stay strings here; they are coerced to
//! their declared types when arguments are bound.

use crate::error::{DispatchError, ValueSource};

/// Decoded query string pairs, in the order they appear in the URL.
///
/// # Example
///
/// ```rust
/// use ariadne_dispatch::QueryParams;
///
/// let query = QueryParams::parse(Some("q=rust+lang&limit=10")).unwrap();
/// assert_eq!(query.get("q"), Some("rust lang"));
/// assert_eq!(query.get("limit"), Some("10"));
/// assert_eq!(query.get("offset"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decodes a query string (the part after `?`).
    ///
    /// `None` and the empty string both give an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::BadRequest`] if the string cannot be
    /// decoded.
    pub fn parse(query: Option<&str>) -> Result<Self, DispatchError> {
        let query = query.unwrap_or("");
        if query.is_empty() {
            return Ok(Self::default());
        }

        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
            .map_err(|e| DispatchError::bad_request(ValueSource::Query, "", e.to_string()))?;

        Ok(Self { pairs })
    }

    /// Returns the value for `name`.
    ///
    /// A key repeated in the query string resolves to its last value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the query string was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of decoded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the decoded pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_none_and_empty() {
        assert!(QueryParams::parse(None).unwrap().is_empty());
        assert!(QueryParams::parse(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_decodes_values() {
        let query = QueryParams::parse(Some("name=J%C3%BCrgen&tag=a%26b&sp=a+b")).unwrap();
        assert_eq!(query.get("name"), Some("Jürgen"));
        assert_eq!(query.get("tag"), Some("a&b"));
        assert_eq!(query.get("sp"), Some("a b"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let query = QueryParams::parse(Some("page=1&page=2")).unwrap();
        assert_eq!(query.get("page"), Some("2"));
    }

    #[test]
    fn test_key_without_value() {
        let query = QueryParams::parse(Some("flag&other=1")).unwrap();
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.get("other"), Some("1"));
    }

    #[test]
    fn test_iter_preserves_order() {
        let query = QueryParams::parse(Some("b=2&a=1")).unwrap();
        let keys: Vec<_> = query.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
