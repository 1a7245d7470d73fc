//! Reverse routing: URL generation from a route name and values.

use indexmap::IndexMap;

use crate::error::ReverseError;
use crate::location::RouteLocation;
use crate::param::ParamKind;
use crate::router::CompiledRoutes;
use crate::value::ParamValue;

/// Generates URLs for named routes.
///
/// Segment values are inserted as rendered by [`ParamValue`]'s `Display`,
/// as-is and without percent-encoding. A rendered value must be non-empty
/// and free of `/`, `?` and `#`. Query values are form-urlencoded.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{compile, DeclaredType, ParamDescriptor, ParamValue, RouteDeclaration, Target};
/// use http::Method;
/// use indexmap::IndexMap;
///
/// let routes = compile(vec![
///     RouteDeclaration::new(Method::GET, "/user/{id}", Target::new("User", "get"))
///         .name("user.get")
///         .param(ParamDescriptor::new("id", DeclaredType::Int))
///         .param(ParamDescriptor::new("full", DeclaredType::Bool).optional()),
/// ])
/// .unwrap();
///
/// let mut values = IndexMap::new();
/// values.insert("id".to_string(), ParamValue::from(5));
/// values.insert("full".to_string(), ParamValue::from(true));
///
/// let url = routes.reverse().url_for("user.get", &values).unwrap();
/// assert_eq!(url, "/user/5?full=true");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReverseRouter<'a> {
    routes: &'a CompiledRoutes,
}

impl<'a> ReverseRouter<'a> {
    /// Creates a generator over `routes`.
    #[must_use]
    pub const fn new(routes: &'a CompiledRoutes) -> Self {
        Self { routes }
    }

    /// Builds the URL of the route registered under `name`.
    ///
    /// Every SEGMENT parameter must have a value. QUERY parameters
    /// without a value are left out; values for names the route does not
    /// bind are ignored.
    ///
    /// # Errors
    ///
    /// - [`ReverseError::UnknownRoute`] for an unregistered name;
    /// - [`ReverseError::MissingRequiredParam`] for a missing segment value;
    /// - [`ReverseError::InvalidSegmentValue`] for a segment value that is
    ///   empty or would split the path.
    pub fn url_for(
        &self,
        name: &str,
        values: &IndexMap<String, ParamValue>,
    ) -> Result<String, ReverseError> {
        let reverse = self
            .routes
            .named(name)
            .ok_or_else(|| ReverseError::UnknownRoute(name.to_string()))?;
        let entry = self
            .routes
            .handler(reverse.handler)
            .ok_or_else(|| ReverseError::UnknownRoute(name.to_string()))?;

        let holes: Vec<usize> = reverse
            .template
            .iter()
            .enumerate()
            .filter_map(|(position, segment)| segment.is_none().then_some(position))
            .collect();
        let mut segments: Vec<String> = reverse
            .template
            .iter()
            .map(|segment| segment.clone().unwrap_or_default())
            .collect();

        for binding in entry.bindings_of(ParamKind::Segment) {
            let value = values
                .get(&binding.name)
                .ok_or_else(|| ReverseError::MissingRequiredParam {
                    route: name.to_string(),
                    param: binding.name.clone(),
                })?;
            let rendered = value.to_string();
            if rendered.is_empty() || rendered.contains(['/', '?', '#']) {
                return Err(ReverseError::InvalidSegmentValue {
                    route: name.to_string(),
                    param: binding.name.clone(),
                    value: rendered,
                });
            }
            if let Some(slot) = binding
                .segment_index
                .and_then(|i| holes.get(i))
                .and_then(|&position| segments.get_mut(position))
            {
                *slot = rendered;
            }
        }

        let query: Vec<(&str, String)> = entry
            .bindings_of(ParamKind::Query)
            .filter_map(|binding| {
                values
                    .get(&binding.name)
                    .map(|value| (binding.name.as_str(), value.to_string()))
            })
            .collect();

        let mut url = format!("/{}", segments.join("/"));
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(&query)
                .map_err(|e| ReverseError::QueryEncoding(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }
        Ok(url)
    }

    /// Rebuilds the URL of a previously matched route, with `overrides`
    /// replacing the recorded values.
    ///
    /// # Errors
    ///
    /// See [`Self::url_for`].
    pub fn url_for_location(
        &self,
        location: &RouteLocation,
        overrides: &IndexMap<String, ParamValue>,
    ) -> Result<String, ReverseError> {
        let mut values = location.params.clone();
        values.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.url_for(&location.name, &values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::declaration::{RouteDeclaration, Target};
    use crate::param::{DeclaredType, ParamDescriptor};
    use http::Method;

    fn routes() -> CompiledRoutes {
        compile(vec![
            RouteDeclaration::new(
                Method::GET,
                "/specie/{specie}/color/{color}",
                Target::new("Animal", "find"),
            )
            .name("animal")
            .param(ParamDescriptor::new("color", DeclaredType::String))
            .param(ParamDescriptor::new("specie", DeclaredType::String)),
            RouteDeclaration::new(Method::GET, "/user", Target::new("User", "list"))
                .name("user.list")
                .param(ParamDescriptor::new("active", DeclaredType::Bool).optional())
                .param(ParamDescriptor::new("q", DeclaredType::String).optional())
                .param(ParamDescriptor::request("req")),
            RouteDeclaration::new(Method::GET, "/", Target::new("Home", "index")).name("home"),
        ])
        .unwrap()
    }

    fn values(pairs: &[(&str, ParamValue)]) -> IndexMap<String, ParamValue> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_segments_fill_holes_by_placeholder_position() {
        let routes = routes();
        let url = routes
            .reverse()
            .url_for(
                "animal",
                &values(&[("color", "red".into()), ("specie", "fox".into())]),
            )
            .unwrap();
        assert_eq!(url, "/specie/fox/color/red");
    }

    #[test]
    fn test_segment_values_that_cannot_round_trip_are_rejected() {
        let routes = routes();
        let reverse = routes.reverse();

        for bad in ["", "a/b", "a?b", "a#b"] {
            let err = reverse
                .url_for(
                    "animal",
                    &values(&[("color", "red".into()), ("specie", bad.into())]),
                )
                .unwrap_err();
            assert_eq!(
                err,
                ReverseError::InvalidSegmentValue {
                    route: "animal".into(),
                    param: "specie".into(),
                    value: bad.into(),
                }
            );
        }

        let url = reverse
            .url_for(
                "animal",
                &values(&[("color", "dark red".into()), ("specie", "fox".into())]),
            )
            .unwrap();
        assert_eq!(url, "/specie/fox/color/dark red");
    }

    #[test]
    fn test_unknown_route() {
        let routes = routes();
        assert_eq!(
            routes.reverse().url_for("nope", &IndexMap::new()).unwrap_err(),
            ReverseError::UnknownRoute("nope".into())
        );
    }

    #[test]
    fn test_missing_segment_value() {
        let routes = routes();
        let err = routes
            .reverse()
            .url_for("animal", &values(&[("color", "red".into())]))
            .unwrap_err();
        assert_eq!(
            err,
            ReverseError::MissingRequiredParam {
                route: "animal".into(),
                param: "specie".into(),
            }
        );
    }

    #[test]
    fn test_query_values_are_optional_and_encoded() {
        let routes = routes();
        let reverse = routes.reverse();

        assert_eq!(reverse.url_for("user.list", &IndexMap::new()).unwrap(), "/user");
        assert_eq!(
            reverse
                .url_for("user.list", &values(&[("active", false.into())]))
                .unwrap(),
            "/user?active=false"
        );
        assert_eq!(
            reverse
                .url_for(
                    "user.list",
                    &values(&[("q", "a b&c".into()), ("active", true.into())])
                )
                .unwrap(),
            "/user?active=true&q=a+b%26c"
        );
    }

    #[test]
    fn test_unbound_values_are_ignored() {
        let routes = routes();
        let url = routes
            .reverse()
            .url_for("user.list", &values(&[("req", "x".into()), ("other", 1.into())]))
            .unwrap();
        assert_eq!(url, "/user");
    }

    #[test]
    fn test_root_route() {
        let routes = routes();
        assert_eq!(routes.reverse().url_for("home", &IndexMap::new()).unwrap(), "/");
    }

    #[test]
    fn test_url_for_location_with_overrides() {
        let routes = routes();
        let location = RouteLocation::new("animal")
            .with_param("specie", "fox")
            .with_param("color", "red");

        let reverse = routes.reverse();
        assert_eq!(
            reverse.url_for_location(&location, &IndexMap::new()).unwrap(),
            "/specie/fox/color/red"
        );
        assert_eq!(
            reverse
                .url_for_location(&location, &values(&[("color", "blue".into())]))
                .unwrap(),
            "/specie/fox/color/blue"
        );
    }
}
