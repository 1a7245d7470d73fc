//! # Ariadne
//!
//! **Compiled HTTP routing with typed argument binding and reverse routing**
//!
//! Ariadne turns declared routes into an immutable segment trie once at
//! startup, then resolves every request against it:
//!
//! - **Static beats dynamic** at every segment, with backtracking when a
//!   static branch dead-ends
//! - **Distinct 404 and 405** outcomes, the latter listing allowed methods
//! - **Typed arguments** from path segments, the query string and the body
//! - **Reverse routing** from route names back to URLs
//!
//! ## Quick Start
//!
//! ```rust
//! use ariadne::prelude::*;
//! use bytes::Bytes;
//! use http::Request;
//!
//! let users = Controller::new("User")
//!     .prefix("/user")
//!     .endpoint(
//!         Endpoint::get("{id}", "show")
//!             .name("user.show")
//!             .param(ParamDescriptor::new("id", DeclaredType::Int)),
//!     );
//!
//! let app = Ariadne::builder()
//!     .init_logging(false)
//!     .controller(users)
//!     .build()?;
//!
//! let request = Request::get("/user/42").body(Bytes::new()).unwrap();
//! let invocation = app.dispatch(&request).unwrap();
//! assert_eq!(invocation.value("id"), Some(&ParamValue::Int(42)));
//! # Ok::<(), ariadne::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! declarations → compile → CompiledRoutes ─┬→ Dispatcher → Invocation → HandlerInvoker
//!                  (once, via store)       └→ ReverseRouter → URL
//! ```

#![doc(html_root_url = "https://docs.rs/ariadne/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod error;

pub use app::{Ariadne, AriadneBuilder};
pub use error::{Error, Result};

// Re-export router types
pub use ariadne_router as router;

// Re-export dispatch types
pub use ariadne_dispatch as dispatch;

// Re-export configuration types
pub use ariadne_config as config;

// Re-export logging setup
pub use ariadne_telemetry as telemetry;

pub use ariadne_router::{
    Controller, DeclaredType, Endpoint, ParamDescriptor, ParamValue, RouteDeclaration, Target,
};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use ariadne::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Ariadne, AriadneBuilder, Error};

    // Declarations
    pub use ariadne_router::{
        Controller, DeclaredType, Endpoint, ParamDescriptor, RouteDeclaration, Target,
    };

    // Compiled routes and reverse routing
    pub use ariadne_router::{
        CompileError, CompiledRoutes, CompiledStore, MemoryStore, ParamValue, ReverseError,
        ReverseRouter, RouteLocation,
    };

    // Dispatch
    pub use ariadne_dispatch::{
        Argument, BodyValue, DispatchError, Dispatcher, HandlerInvoker, Invocation,
    };

    // Configuration
    pub use ariadne_config::{AriadneConfig, ConfigLoader};
}
