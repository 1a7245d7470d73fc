//! Route compilation, matching and reverse routing for Ariadne.
//!
//! This crate turns a list of route declarations into an immutable
//! [`CompiledRoutes`] value: a segment trie for matching, a flat handler
//! table with the classified parameters of every route, and a name index
//! for URL generation.
//!
//! # Features
//!
//! - **Static before dynamic**: a literal segment always beats a
//!   placeholder at the same depth, with full backtracking when the
//!   literal branch dead-ends further down
//! - **Distinct 404/405**: an unknown path and a known path with the
//!   wrong method are different outcomes
//! - **Parameter classification**: handler arguments become SEGMENT,
//!   QUERY, BODY, REQUEST or RESPONSE bindings, checked at compile time
//! - **Reverse routing**: URLs from route names and typed values
//!
//! # Example
//!
//! ```rust
//! use ariadne_router::{
//!     compile, DeclaredType, ParamDescriptor, ParamValue, RouteDeclaration, Target,
//! };
//! use http::Method;
//! use indexmap::IndexMap;
//!
//! let routes = compile(vec![
//!     RouteDeclaration::new(Method::GET, "/greet/{name}", Target::new("Hello", "greet"))
//!         .name("hello.greet")
//!         .param(ParamDescriptor::new("name", DeclaredType::String)),
//!     RouteDeclaration::new(Method::GET, "/greet/king", Target::new("Hello", "greet_king")),
//! ])
//! .unwrap();
//!
//! let found = routes.match_route(&Method::GET, "/greet/king").unwrap();
//! assert_eq!(found.entry.target.method, "greet_king");
//!
//! let found = routes.match_route(&Method::GET, "/greet/world").unwrap();
//! assert_eq!(found.params.get("name"), Some("world"));
//!
//! let mut values = IndexMap::new();
//! values.insert("name".to_string(), ParamValue::from("world"));
//! assert_eq!(routes.reverse().url_for("hello.greet", &values).unwrap(), "/greet/world");
//! ```
//!
//! # Architecture
//!
//! Placeholders share one dynamic child per node, so the trie for the
//! routes above plus `POST /greet` looks like:
//!
//! ```text
//!              (root)
//!                │
//!             "greet"  [POST]
//!                │
//!        ┌───────┴───────┐
//!        │               │
//!     "king"          {dyn}
//!      [GET]          [GET]
//! ```

mod compiler;
mod declaration;
mod error;
mod location;
mod method_router;
mod node;
mod param;
mod params;
mod pattern;
mod reverse;
mod router;
mod store;
mod table;
mod value;

pub use compiler::{compile, RouteCompiler};
pub use declaration::{Attributes, Controller, Endpoint, RouteDeclaration, Target};
pub use error::{CompileError, CompileResult, MatchError, ReverseError};
pub use location::RouteLocation;
pub use method_router::MethodRouter;
pub use node::Node;
pub use param::{classify, DeclaredType, ParamBinding, ParamDescriptor, ParamKind, UnsupportedType};
pub use params::Params;
pub use pattern::{split_path, PathPattern, Segment};
pub use reverse::ReverseRouter;
pub use router::{CompiledRoutes, ReverseEntry, RouteMatch};
pub use store::{CompiledStore, MemoryStore};
pub use table::{HandlerEntry, HandlerRef};
pub use value::{coerce, CoerceError, ParamType, ParamValue};
