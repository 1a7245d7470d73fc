//! Property tests: URLs generated for a named route match that route
//! again and coerce back to the values they were built from.

use ariadne_router::{
    coerce, compile, CompiledRoutes, DeclaredType, ParamDescriptor, ParamKind, ParamValue,
    RouteDeclaration, Target,
};
use http::Method;
use indexmap::IndexMap;
use proptest::prelude::*;

fn routes() -> CompiledRoutes {
    compile(vec![
        RouteDeclaration::new(
            Method::GET,
            "/shop/{category}/item/{id}",
            Target::new("Shop", "item"),
        )
        .name("shop.item")
        .param(ParamDescriptor::new("id", DeclaredType::Int))
        .param(ParamDescriptor::new("category", DeclaredType::String))
        .param(ParamDescriptor::new("in_stock", DeclaredType::Bool).optional())
        .param(ParamDescriptor::new("max_price", DeclaredType::Float).optional())
        .param(ParamDescriptor::new("page", DeclaredType::Int).optional())
        .param(ParamDescriptor::new("q", DeclaredType::String).optional()),
        RouteDeclaration::new(Method::GET, "/shop/featured/item/{id}", Target::new("Shop", "featured"))
            .name("shop.featured")
            .param(ParamDescriptor::new("id", DeclaredType::Int)),
    ])
    .unwrap()
}

/// Matches `url` and returns every SEGMENT/QUERY value coerced to its
/// declared type.
fn resolve(routes: &CompiledRoutes, url: &str) -> (String, IndexMap<String, ParamValue>) {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let found = routes.match_route(&Method::GET, path).unwrap();
    let raw_query: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();

    let mut resolved = IndexMap::new();
    for binding in &found.entry.bindings {
        let raw = match binding.kind {
            ParamKind::Segment => found.params.get(&binding.name).map(str::to_string),
            ParamKind::Query => raw_query
                .iter()
                .find(|(k, _)| k == &binding.name)
                .map(|(_, v)| v.clone()),
            _ => None,
        };
        if let (Some(raw), Some(ty)) = (raw, binding.ty) {
            resolved.insert(binding.name.clone(), coerce(&raw, ty).unwrap());
        }
    }
    (found.entry.target.method.clone(), resolved)
}

proptest! {
    #[test]
    fn prop_reverse_then_match_round_trips(
        category in "[A-Za-z0-9_-]{1,12}",
        id in any::<i64>(),
        in_stock in proptest::option::of(any::<bool>()),
        max_price in proptest::option::of(-1.0e9f64..1.0e9),
        page in proptest::option::of(0i64..10_000),
        q in proptest::option::of("[ -~]{0,16}"),
    ) {
        prop_assume!(category != "featured");
        let routes = routes();

        let mut values = IndexMap::new();
        values.insert("category".to_string(), ParamValue::from(category.as_str()));
        values.insert("id".to_string(), ParamValue::Int(id));
        if let Some(v) = in_stock {
            values.insert("in_stock".to_string(), ParamValue::Bool(v));
        }
        if let Some(v) = max_price {
            values.insert("max_price".to_string(), ParamValue::Float(v));
        }
        if let Some(v) = page {
            values.insert("page".to_string(), ParamValue::Int(v));
        }
        if let Some(v) = &q {
            values.insert("q".to_string(), ParamValue::from(v.as_str()));
        }

        let url = routes.reverse().url_for("shop.item", &values).unwrap();
        let (method, resolved) = resolve(&routes, &url);

        prop_assert_eq!(method, "item");
        for (name, value) in &values {
            prop_assert_eq!(resolved.get(name), Some(value), "{} in {}", name, url);
        }
        prop_assert_eq!(resolved.len(), values.len());
    }

    #[test]
    fn prop_static_route_round_trips(id in any::<i64>()) {
        let routes = routes();
        let mut values = IndexMap::new();
        values.insert("id".to_string(), ParamValue::Int(id));

        let url = routes.reverse().url_for("shop.featured", &values).unwrap();
        let (method, resolved) = resolve(&routes, &url);

        prop_assert_eq!(method, "featured");
        prop_assert_eq!(resolved.get("id"), Some(&ParamValue::Int(id)));
    }
}
