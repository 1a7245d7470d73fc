//! Compiled-data stores.
//!
//! Compilation is the expensive step, so hosts keep its result in a
//! [`CompiledStore`] and compile at most once per process. Where the
//! result lives (memory, disk, a shared cache) is the store's business;
//! [`CompiledRoutes`] is serde-serializable for stores that persist it.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::debug;

use crate::error::CompileResult;
use crate::router::CompiledRoutes;

/// Holds compiled routes between uses.
pub trait CompiledStore: Send + Sync {
    /// Returns the stored routes, running `compile` first if there are
    /// none.
    ///
    /// # Errors
    ///
    /// Returns the error of `compile`; nothing is stored in that case.
    fn get_or_compile(
        &self,
        compile: &dyn Fn() -> CompileResult<CompiledRoutes>,
    ) -> CompileResult<Arc<CompiledRoutes>>;

    /// Drops the stored routes so the next call recompiles. Call this
    /// whenever the declaration source changes.
    fn invalidate(&self);
}

/// Process-local store.
///
/// Readers share one [`Arc`]; `compile` runs at most once until the
/// store is invalidated, even when many threads ask at the same time.
///
/// # Example
///
/// ```rust
/// use ariadne_router::{compile, CompiledStore, MemoryStore, RouteDeclaration, Target};
/// use http::Method;
///
/// let store = MemoryStore::new();
/// let routes = store
///     .get_or_compile(&|| {
///         compile(vec![RouteDeclaration::new(Method::GET, "/", Target::new("Home", "index"))])
///     })
///     .unwrap();
///
/// assert_eq!(routes.len(), 1);
/// assert!(store.is_compiled());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Arc<CompiledRoutes>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if routes are currently stored.
    #[must_use]
    pub fn is_compiled(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl CompiledStore for MemoryStore {
    fn get_or_compile(
        &self,
        compile: &dyn Fn() -> CompileResult<CompiledRoutes>,
    ) -> CompileResult<Arc<CompiledRoutes>> {
        if let Some(routes) = self.slot.read().as_ref() {
            return Ok(Arc::clone(routes));
        }

        // Only one upgradable guard exists at a time, so a second caller
        // waits here and then sees the first caller's result.
        let guard = self.slot.upgradable_read();
        if let Some(routes) = guard.as_ref() {
            return Ok(Arc::clone(routes));
        }

        debug!("Compiling routes into memory store");
        let routes = Arc::new(compile()?);
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        *guard = Some(Arc::clone(&routes));
        Ok(routes)
    }

    fn invalidate(&self) {
        debug!("Invalidating memory store");
        *self.slot.write() = None;
    }
}
