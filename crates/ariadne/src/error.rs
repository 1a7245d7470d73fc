//! Bootstrap errors.

use ariadne_config::ConfigError;
use ariadne_router::CompileError;
use ariadne_telemetry::TelemetryError;
use thiserror::Error;

/// Result alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why an [`Ariadne`](crate::Ariadne) instance could not be built.
///
/// All variants are startup faults; request-time outcomes are
/// [`DispatchError`](ariadne_dispatch::DispatchError)s.
#[derive(Debug, Error)]
pub enum Error {
    /// The route declarations do not compile.
    #[error("route compilation failed: {0}")]
    Compile(#[from] CompileError),

    /// The configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Telemetry(#[from] TelemetryError),
}
