//! Configuration schema types.
//!
//! This module defines the structure of every configuration section.

use ariadne_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

/// Routing configuration section.
///
/// # Example
///
/// ```
/// use ariadne_config::RoutingConfig;
///
/// let config = RoutingConfig::default();
/// assert!(config.head_as_get);
/// assert!(config.cache_compiled);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Match `HEAD` requests against `GET` routes.
    #[serde(default = "default_true")]
    pub head_as_get: bool,

    /// Compile routes once through the compiled-data store instead of on
    /// every bootstrap.
    #[serde(default = "default_true")]
    pub cache_compiled: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            head_as_get: true,
            cache_compiled: true,
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directives, e.g. `info` or `ariadne_router=debug,warn`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include ANSI color codes in output.
    #[serde(default)]
    pub ansi_enabled: bool,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            ansi_enabled: false,
            include_location: false,
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            level: config.level.clone(),
            json_format: config.format == LogFormat::Json,
            ansi: config.ansi_enabled,
            file_line_info: config.include_location,
            include_target: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
