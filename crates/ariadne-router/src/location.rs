//! The route currently being handled.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::ParamValue;

/// Name and resolved parameters of a matched named route.
///
/// Recorded at match time so that the URL of the current route can be
/// regenerated later, optionally with some parameters replaced, through
/// [`crate::ReverseRouter::url_for_location`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLocation {
    /// Route name.
    pub name: String,
    /// Coerced segment values and present query values.
    pub params: IndexMap<String, ParamValue>,
}

impl RouteLocation {
    /// Creates a location with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: IndexMap::new(),
        }
    }

    /// Adds a parameter value.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Returns the recorded value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}
