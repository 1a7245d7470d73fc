//! Typed configuration for Ariadne.
//!
//! This crate provides a strongly-typed configuration system with support
//! for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! [`AriadneConfig`] has two sections:
//!
//! - [`RoutingConfig`] - `HEAD` handling and compiled-route caching
//! - [`LoggingConfig`] - log level, format and decoration
//!
//! # Example
//!
//! ```no_run
//! use ariadne_config::ConfigLoader;
//!
//! # fn main() -> Result<(), ariadne_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_file("ariadne.toml")?
//!     .with_env_prefix("ARIADNE")
//!     .load()?;
//!
//! println!("HEAD as GET: {}", config.routing.head_as_get);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [routing]
//! head_as_get = true
//! cache_compiled = true
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! ansi_enabled = false
//! include_location = false
//! ```
//!
//! # Environment Variable Overrides
//!
//! Every value can be overridden with `PREFIX__SECTION__KEY`:
//!
//! - `ARIADNE__ROUTING__HEAD_AS_GET=false`
//! - `ARIADNE__LOGGING__LEVEL=ariadne_router=debug,info`
//! - `ARIADNE__LOGGING__FORMAT=pretty`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
