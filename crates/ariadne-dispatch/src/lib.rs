//! # Ariadne Dispatch
//!
//! Request-time handoff for the Ariadne router.
//!
//! A [`Dispatcher`] takes an `http::Request<Bytes>`, matches it against
//! the compiled routes and binds every declared handler parameter:
//!
//! | Kind | Source | Bound as |
//! |------|--------|----------|
//! | segment | dynamic path segment | [`Argument::Segment`], coerced |
//! | query | query string | [`Argument::Query`], coerced, `None` if absent |
//! | body | request body | [`Argument::Body`], text or JSON |
//! | request / response | n/a | placeholders for the invoker |
//!
//! The result is an [`Invocation`], handed to a [`HandlerInvoker`]. Every
//! client-facing failure is a [`DispatchError`] with an HTTP status.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ariadne_dispatch::{DispatchError, Dispatcher};
//! use ariadne_router::{compile, DeclaredType, ParamDescriptor, RouteDeclaration, Target};
//! use bytes::Bytes;
//! use http::{Method, Request, StatusCode};
//!
//! let routes = compile(vec![RouteDeclaration::new(
//!     Method::GET,
//!     "/user",
//!     Target::new("User", "list"),
//! )
//! .param(ParamDescriptor::new("active", DeclaredType::Bool).optional())])
//! .unwrap();
//! let dispatcher = Dispatcher::new(Arc::new(routes));
//!
//! let ok = Request::get("/user?active=1").body(Bytes::new()).unwrap();
//! let invocation = dispatcher.dispatch(&ok).unwrap();
//! assert_eq!(invocation.value("active").and_then(|v| v.as_bool()), Some(true));
//!
//! let bad = Request::get("/user?active=yes").body(Bytes::new()).unwrap();
//! let err = dispatcher.dispatch(&bad).unwrap_err();
//! assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
//! ```

mod body;
mod dispatcher;
mod error;
mod invocation;
mod query;

pub use body::{decode_body, BodyValue};
pub use dispatcher::{Dispatcher, HandlerInvoker};
pub use error::{DispatchError, ValueSource};
pub use invocation::{Argument, Invocation};
pub use query::QueryParams;
