//! Logging setup for Ariadne.
//!
//! Ariadne's crates emit `tracing` events and never install a
//! subscriber themselves. Hosts either bring their own subscriber or call
//! [`init_logging`] once at startup.
//!
//! ```text
//!  ariadne-router ──┐
//!                   ├──► tracing events ──► EnvFilter ──► fmt (json | pretty) ──► stdout
//!  ariadne-dispatch ┘
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
