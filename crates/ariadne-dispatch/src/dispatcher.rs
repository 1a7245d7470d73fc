//! Request dispatch.
//!
//! The [`Dispatcher`] turns an incoming request into an [`Invocation`]:
//! it matches method and path against the compiled routes, coerces every
//! segment and query value to its declared type, decodes body parameters
//! and records the current [`RouteLocation`] for named routes. Calling
//! the handler is left to a [`HandlerInvoker`].

use std::sync::Arc;

use ariadne_router::{
    coerce, CompiledRoutes, ParamKind, ParamType, ReverseRouter, RouteLocation, RouteMatch,
};
use bytes::Bytes;
use http::{Method, Request};
use indexmap::IndexMap;
use tracing::debug;

use crate::body::decode_body;
use crate::error::{DispatchError, ValueSource};
use crate::invocation::{Argument, Invocation};
use crate::query::QueryParams;

/// Calls handler code with a dispatched request.
///
/// Closures taking `(Request<Bytes>, Invocation)` implement this trait.
///
/// # Example
///
/// ```rust
/// use ariadne_dispatch::{HandlerInvoker, Invocation};
/// use bytes::Bytes;
/// use http::Request;
///
/// struct Echo;
///
/// impl HandlerInvoker for Echo {
///     type Output = String;
///
///     fn invoke(&self, _request: Request<Bytes>, invocation: Invocation) -> String {
///         invocation.target.to_string()
///     }
/// }
/// ```
pub trait HandlerInvoker {
    /// What invoking a handler produces.
    type Output;

    /// Invokes the handler named by `invocation.target`.
    fn invoke(&self, request: Request<Bytes>, invocation: Invocation) -> Self::Output;
}

impl<F, O> HandlerInvoker for F
where
    F: Fn(Request<Bytes>, Invocation) -> O,
{
    type Output = O;

    fn invoke(&self, request: Request<Bytes>, invocation: Invocation) -> O {
        self(request, invocation)
    }
}

/// Matches requests against compiled routes and binds handler arguments.
///
/// Cheap to clone; clones share the compiled routes.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use ariadne_dispatch::Dispatcher;
/// use ariadne_router::{compile, DeclaredType, ParamDescriptor, RouteDeclaration, Target};
/// use bytes::Bytes;
/// use http::{Method, Request};
///
/// let routes = compile(vec![RouteDeclaration::new(
///     Method::GET,
///     "/user/{id}",
///     Target::new("User", "show"),
/// )
/// .param(ParamDescriptor::new("id", DeclaredType::Int))])
/// .unwrap();
///
/// let dispatcher = Dispatcher::new(Arc::new(routes));
/// let request = Request::get("/user/42").body(Bytes::new()).unwrap();
///
/// let invocation = dispatcher.dispatch(&request).unwrap();
/// assert_eq!(invocation.target.method, "show");
/// assert_eq!(invocation.value("id").and_then(|v| v.as_int()), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: Arc<CompiledRoutes>,
    head_as_get: bool,
}

impl Dispatcher {
    /// Creates a dispatcher. `HEAD` requests are served by `GET` routes.
    #[must_use]
    pub fn new(routes: Arc<CompiledRoutes>) -> Self {
        Self {
            routes,
            head_as_get: true,
        }
    }

    /// Sets whether `HEAD` requests are served by `GET` routes.
    #[must_use]
    pub fn head_as_get(mut self, enabled: bool) -> Self {
        self.head_as_get = enabled;
        self
    }

    /// Returns the compiled routes.
    #[must_use]
    pub fn routes(&self) -> &CompiledRoutes {
        &self.routes
    }

    /// Returns a reverse router over the same routes.
    #[must_use]
    pub fn reverse(&self) -> ReverseRouter<'_> {
        self.routes.reverse()
    }

    /// Dispatches a request.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub fn dispatch(&self, request: &Request<Bytes>) -> Result<Invocation, DispatchError> {
        let uri = request.uri();
        self.resolve(request.method(), uri.path(), uri.query(), request.body())
    }

    /// Dispatches the parts of a request.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::NotFound`] if no route matches `path`;
    /// - [`DispatchError::MethodNotAllowed`] if one does, but not for `method`;
    /// - [`DispatchError::BadRequest`] if a segment or query value does not
    ///   coerce to its declared type, or a structured body is not JSON;
    /// - [`DispatchError::MissingBody`] if a body parameter is declared and
    ///   `body` is empty.
    pub fn resolve(
        &self,
        method: &Method,
        path: &str,
        query: Option<&str>,
        body: &Bytes,
    ) -> Result<Invocation, DispatchError> {
        let found = self
            .routes
            .match_route_with(method, path, self.head_as_get)
            .map_err(|e| {
                debug!(method = %method, path, status = e.status_code().as_u16(), "No route");
                DispatchError::from(e)
            })?;

        let query = QueryParams::parse(query)?;
        let invocation = bind(&found, &query, body).map_err(|e| {
            debug!(
                method = %method,
                path,
                handler = %found.entry.target,
                error = %e,
                "Rejected request"
            );
            e
        })?;

        debug!(
            method = %method,
            path,
            handler = %invocation.target,
            args = invocation.args.len(),
            "Dispatched request"
        );
        Ok(invocation)
    }

    /// Dispatches a request and hands it to `invoker`.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`]. The invoker is not called on error.
    pub fn handle<I: HandlerInvoker>(
        &self,
        request: Request<Bytes>,
        invoker: &I,
    ) -> Result<I::Output, DispatchError> {
        let invocation = self.dispatch(&request)?;
        Ok(invoker.invoke(request, invocation))
    }
}

fn bind(
    found: &RouteMatch<'_>,
    query: &QueryParams,
    body: &Bytes,
) -> Result<Invocation, DispatchError> {
    let entry = found.entry;
    let mut args = IndexMap::with_capacity(entry.bindings.len());
    let mut location = entry.name.as_ref().map(RouteLocation::new);

    for binding in &entry.bindings {
        let name = binding.name.as_str();
        let ty = binding.ty.unwrap_or(ParamType::String);

        let arg = match binding.kind {
            ParamKind::Segment => {
                let raw = found.params.get(name).unwrap_or_default();
                let value = coerce(raw, ty)
                    .map_err(|e| DispatchError::coercion(ValueSource::Segment, name, &e))?;
                Argument::Segment(value)
            }
            ParamKind::Query => {
                let value = query
                    .get(name)
                    .map(|raw| coerce(raw, ty))
                    .transpose()
                    .map_err(|e| DispatchError::coercion(ValueSource::Query, name, &e))?;
                Argument::Query(value)
            }
            ParamKind::Body => Argument::Body(decode_body(name, ty, body)?),
            ParamKind::Request => Argument::Request,
            ParamKind::Response => Argument::Response,
        };

        if let (Some(location), Some(value)) = (location.as_mut(), arg.value()) {
            location.params.insert(binding.name.clone(), value.clone());
        }
        args.insert(binding.name.clone(), arg);
    }

    Ok(Invocation {
        handler: found.handler,
        target: entry.target.clone(),
        attributes: entry.attributes.clone(),
        args,
        location,
    })
}
