//! Main configuration types.
//!
//! This module provides the top-level [`AriadneConfig`] struct and its builder.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig, RoutingConfig};

/// Complete Ariadne configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use ariadne_config::AriadneConfig;
///
/// let config = AriadneConfig::default();
/// assert!(config.routing.head_as_get);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct AriadneConfig {
    /// Routing behaviour.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AriadneConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use ariadne_config::{AriadneConfig, RoutingConfig};
    ///
    /// let config = AriadneConfig::builder()
    ///     .routing(RoutingConfig {
    ///         cache_compiled: false,
    ///         ..Default::default()
    ///     })
    ///     .build();
    ///
    /// assert!(!config.routing.cache_compiled);
    /// ```
    #[must_use]
    pub fn builder() -> AriadneConfigBuilder {
        AriadneConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if logging is enabled and
    /// `logging.level` is not a valid filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.enabled {
            ariadne_telemetry::create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }
        Ok(())
    }

    /// Create a development configuration preset.
    ///
    /// Pretty, colored, debug-level logs with source locations.
    ///
    /// # Example
    ///
    /// ```
    /// use ariadne_config::AriadneConfig;
    ///
    /// let config = AriadneConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.ansi_enabled = true;
        config.logging.include_location = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// JSON logs at `info`; compiled routes are cached.
    ///
    /// # Example
    ///
    /// ```
    /// use ariadne_config::AriadneConfig;
    ///
    /// let config = AriadneConfig::production();
    /// assert_eq!(config.logging.format, ariadne_config::LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.logging.ansi_enabled = false;
        config.routing.cache_compiled = true;

        config
    }
}

/// Builder for [`AriadneConfig`].
#[derive(Debug, Default)]
pub struct AriadneConfigBuilder {
    routing: Option<RoutingConfig>,
    logging: Option<LoggingConfig>,
}

impl AriadneConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the routing configuration.
    #[must_use]
    pub fn routing(mut self, routing: RoutingConfig) -> Self {
        self.routing = Some(routing);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Build the configuration.
    ///
    /// Any unset sections will use their default values.
    #[must_use]
    pub fn build(self) -> AriadneConfig {
        AriadneConfig {
            routing: self.routing.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<AriadneConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
