//! Route compilation.
//!
//! Compilation is a pure function of the declaration list: parse each
//! path, classify its parameters, check them against the placeholders,
//! append a handler table entry, insert it into the trie and, for named
//! routes, record a reverse template. The first inconsistency aborts.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::declaration::{Controller, RouteDeclaration, Target};
use crate::error::{CompileError, CompileResult};
use crate::method_router::MethodRouter;
use crate::node::Node;
use crate::param::{classify, ParamKind};
use crate::pattern::{PathPattern, Segment};
use crate::router::{CompiledRoutes, ReverseEntry};
use crate::table::{HandlerEntry, HandlerRef};

/// Compiles a declaration list into [`CompiledRoutes`].
///
/// # Errors
///
/// Returns the first [`CompileError`] found, in declaration order, or
/// [`CompileError::NoControllers`] if `declarations` is empty.
pub fn compile<I>(declarations: I) -> CompileResult<CompiledRoutes>
where
    I: IntoIterator<Item = RouteDeclaration>,
{
    let mut compiler = RouteCompiler::new();
    for declaration in declarations {
        compiler.add(declaration)?;
    }
    compiler.finish()
}

/// Incremental route compiler.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{Controller, DeclaredType, Endpoint, ParamDescriptor, RouteCompiler};
/// use http::Method;
///
/// let mut compiler = RouteCompiler::new();
/// compiler
///     .add_controller(
///         Controller::new("HelloCtrl").prefix("/hello").endpoint(
///             Endpoint::get("greet/{name}", "say_hello")
///                 .name("hello.greet")
///                 .param(ParamDescriptor::new("name", DeclaredType::String)),
///         ),
///     )
///     .unwrap();
/// let routes = compiler.finish().unwrap();
///
/// assert!(routes.match_route(&Method::GET, "/hello/greet/world").is_ok());
/// ```
#[derive(Debug, Default)]
pub struct RouteCompiler {
    root: Node,
    handlers: Vec<HandlerEntry>,
    names: IndexMap<String, ReverseEntry>,
}

impl RouteCompiler {
    /// Creates an empty compiler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles one declaration into the route set.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if the declaration is invalid or collides
    /// with one added earlier.
    pub fn add(&mut self, declaration: RouteDeclaration) -> CompileResult<&mut Self> {
        let RouteDeclaration {
            method,
            path,
            name,
            params,
            attributes,
            target,
        } = declaration;

        if !MethodRouter::supports(&method) {
            return Err(CompileError::UnsupportedMethod {
                method,
                handler: target,
                route: path,
            });
        }

        let pattern = PathPattern::parse(&path);
        let bindings = classify(&pattern, &params).map_err(|e| CompileError::InvalidParamType {
            param: e.param,
            kind: e.kind,
            declared: e.declared,
            handler: target.clone(),
            route: path.clone(),
        })?;

        let mut expected: Vec<&str> = pattern.dynamic_names().collect();
        let mut actual: Vec<&str> = bindings
            .iter()
            .filter(|b| b.kind == ParamKind::Segment)
            .map(|b| b.name.as_str())
            .collect();
        expected.sort_unstable();
        actual.sort_unstable();
        // Placeholders and SEGMENT params must match as multisets, and a
        // placeholder name may appear only once.
        if expected != actual || has_adjacent_duplicates(&expected) {
            return Err(CompileError::InconsistentParams {
                route: path.clone(),
                handler: target.clone(),
                expected: expected.into_iter().map(str::to_string).collect(),
                actual: actual.into_iter().map(str::to_string).collect(),
            });
        }

        if let Some(name) = &name {
            if let Some(existing) = self.names.get(name) {
                return Err(CompileError::AmbiguousRoute {
                    existing: self.target_of(existing.handler),
                    method,
                    route: path,
                    name: Some(name.clone()),
                    conflicting: target,
                });
            }
        }

        // Nothing is stored until the trie accepts the route.
        let handler = HandlerRef(self.handlers.len());
        if let Err(existing) = self.root.insert(pattern.segments(), &method, handler) {
            return Err(CompileError::AmbiguousRoute {
                existing: self.target_of(existing),
                method,
                route: path,
                name: None,
                conflicting: target,
            });
        }

        self.handlers.push(HandlerEntry {
            target: target.clone(),
            route: path.clone(),
            bindings,
            attributes,
            name: name.clone(),
        });

        if let Some(name) = name {
            let template = pattern
                .segments()
                .iter()
                .map(|segment| match segment {
                    Segment::Static(literal) => Some(literal.clone()),
                    Segment::Dynamic(_) => None,
                })
                .collect();
            self.names.insert(name, ReverseEntry { handler, template });
        }

        debug!(
            method = %method,
            route = %path,
            handler = %target,
            "Compiled route"
        );
        Ok(self)
    }

    /// Compiles every endpoint of a controller.
    ///
    /// # Errors
    ///
    /// See [`Self::add`].
    pub fn add_controller(&mut self, controller: Controller) -> CompileResult<&mut Self> {
        for declaration in controller.into_declarations() {
            self.add(declaration)?;
        }
        Ok(self)
    }

    fn target_of(&self, handler: HandlerRef) -> Target {
        self.handlers
            .get(handler.index())
            .map(|entry| entry.target.clone())
            .unwrap_or_default()
    }

    /// Freezes the compiled routes.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NoControllers`] if nothing was added.
    pub fn finish(self) -> CompileResult<CompiledRoutes> {
        if self.handlers.is_empty() {
            return Err(CompileError::NoControllers);
        }

        let routes = CompiledRoutes::from_parts(self.root, self.handlers, self.names);
        info!(
            routes = routes.len(),
            named = routes.named_len(),
            nodes = routes.node_count(),
            "Route compilation complete"
        );
        Ok(routes)
    }
}

fn has_adjacent_duplicates(sorted: &[&str]) -> bool {
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}
