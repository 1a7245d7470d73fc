//! Application bootstrap.
//!
//! [`Ariadne`] wires the crates together once at startup: it installs the
//! log subscriber, compiles the declared routes (through a
//! [`CompiledStore`] when caching is on) and builds the [`Dispatcher`].
//! After [`AriadneBuilder::build`] returns, everything is read-only and
//! may be shared across threads.

use std::fmt;
use std::sync::Arc;

use ariadne_config::AriadneConfig;
use ariadne_dispatch::{DispatchError, Dispatcher, HandlerInvoker, Invocation};
use ariadne_router::{
    compile, CompiledRoutes, CompiledStore, Controller, MemoryStore, ReverseRouter,
    RouteDeclaration,
};
use ariadne_telemetry::{init_logging, LogConfig};
use bytes::Bytes;
use http::Request;
use tracing::info;

use crate::error::Result;

/// A compiled, ready-to-dispatch route set.
///
/// # Example
///
/// ```rust
/// use ariadne::{Ariadne, Controller, DeclaredType, Endpoint, ParamDescriptor};
/// use bytes::Bytes;
/// use http::Request;
///
/// let app = Ariadne::builder()
///     .init_logging(false)
///     .controller(
///         Controller::new("Hello")
///             .prefix("/hello")
///             .endpoint(
///                 Endpoint::get("{name}", "greet")
///                     .name("hello")
///                     .param(ParamDescriptor::new("name", DeclaredType::String)),
///             ),
///     )
///     .build()
///     .unwrap();
///
/// let request = Request::get("/hello/world").body(Bytes::new()).unwrap();
/// let invocation = app.dispatch(&request).unwrap();
/// assert_eq!(invocation.target.method, "greet");
///
/// let url = app.url_for("hello", [("name", "there")]).unwrap();
/// assert_eq!(url, "/hello/there");
/// ```
#[derive(Debug, Clone)]
pub struct Ariadne {
    config: AriadneConfig,
    dispatcher: Dispatcher,
}

impl Ariadne {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> AriadneBuilder {
        AriadneBuilder::new()
    }

    /// Returns the configuration this instance was built with.
    #[must_use]
    pub fn config(&self) -> &AriadneConfig {
        &self.config
    }

    /// Returns the compiled routes.
    #[must_use]
    pub fn routes(&self) -> &CompiledRoutes {
        self.dispatcher.routes()
    }

    /// Returns the dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns a reverse router.
    #[must_use]
    pub fn reverse(&self) -> ReverseRouter<'_> {
        self.dispatcher.reverse()
    }

    /// Generates the URL of a named route.
    ///
    /// # Errors
    ///
    /// See [`ReverseRouter::url_for`].
    pub fn url_for<I, K, V>(
        &self,
        name: &str,
        params: I,
    ) -> std::result::Result<String, ariadne_router::ReverseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ariadne_router::ParamValue>,
    {
        let params = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.reverse().url_for(name, &params)
    }

    /// Dispatches a request.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::resolve`].
    pub fn dispatch(&self, request: &Request<Bytes>) -> std::result::Result<Invocation, DispatchError> {
        self.dispatcher.dispatch(request)
    }

    /// Dispatches a request and hands it to `invoker`.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::resolve`].
    pub fn handle<I: HandlerInvoker>(
        &self,
        request: Request<Bytes>,
        invoker: &I,
    ) -> std::result::Result<I::Output, DispatchError> {
        self.dispatcher.handle(request, invoker)
    }
}

/// Builder for [`Ariadne`].
pub struct AriadneBuilder {
    config: AriadneConfig,
    declarations: Vec<RouteDeclaration>,
    store: Option<Arc<dyn CompiledStore>>,
    init_logging: bool,
}

impl Default for AriadneBuilder {
    fn default() -> Self {
        Self {
            config: AriadneConfig::default(),
            declarations: Vec::new(),
            store: None,
            init_logging: true,
        }
    }
}

impl fmt::Debug for AriadneBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AriadneBuilder")
            .field("config", &self.config)
            .field("declarations", &self.declarations.len())
            .field("store", &self.store.is_some())
            .field("init_logging", &self.init_logging)
            .finish()
    }
}

impl AriadneBuilder {
    /// Creates a builder with default configuration and no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: AriadneConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds one route declaration.
    #[must_use]
    pub fn route(mut self, declaration: RouteDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Adds route declarations.
    #[must_use]
    pub fn routes(mut self, declarations: impl IntoIterator<Item = RouteDeclaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    /// Adds every endpoint of a controller.
    #[must_use]
    pub fn controller(mut self, controller: Controller) -> Self {
        self.declarations.extend(controller.into_declarations());
        self
    }

    /// Shares a compiled-data store between bootstraps.
    ///
    /// Used only when `routing.cache_compiled` is on; a fresh
    /// [`MemoryStore`] is used otherwise.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn CompiledStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets whether `build` installs the global log subscriber.
    #[must_use]
    pub fn init_logging(mut self, enabled: bool) -> Self {
        self.init_logging = enabled;
        self
    }

    /// Validates the configuration, installs logging, compiles the routes
    /// and builds the dispatcher.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) if the configuration is invalid;
    /// - [`Error::Telemetry`](crate::Error::Telemetry) if the subscriber cannot be installed;
    /// - [`Error::Compile`](crate::Error::Compile) if the declarations do not compile.
    pub fn build(self) -> Result<Ariadne> {
        let Self {
            config,
            declarations,
            store,
            init_logging: install_logging,
        } = self;

        config.validate()?;
        if install_logging {
            init_logging(&LogConfig::from(&config.logging))?;
        }

        let routes = if config.routing.cache_compiled {
            let store = store.unwrap_or_else(|| Arc::new(MemoryStore::new()));
            store.get_or_compile(&|| compile(declarations.iter().cloned()))?
        } else {
            Arc::new(compile(declarations)?)
        };

        info!(
            routes = routes.len(),
            named = routes.named_len(),
            head_as_get = config.routing.head_as_get,
            cached = config.routing.cache_compiled,
            "Ariadne ready"
        );

        let dispatcher = Dispatcher::new(routes).head_as_get(config.routing.head_as_get);
        Ok(Ariadne { config, dispatcher })
    }
}
