//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROCON_SIGNAL` prefix and nested values use double underscores as separators.
//!
//! Configuration only shapes presentation and logging. Lexicons, thresholds
//! and signal texts are constants of the weighting engine.
//!
//! # Example
//!
//! ```no_run
//! use procon_signal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sorting lists of {} or more items", config.display.sort_min_items);
//! ```

mod display;
mod error;
mod logging;

pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Presentation of weighted lists
    #[serde(default)]
    pub display: DisplayConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROCON_SIGNAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROCON_SIGNAL__DISPLAY__SORT_MIN_ITEMS=5` -> `display.sort_min_items = 5`
    /// - `PROCON_SIGNAL__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROCON_SIGNAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.display.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
