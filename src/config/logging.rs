//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tracing subscriber settings, applied by the binary only
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "info");
        assert!(!config.json);
    }

    #[test]
    fn test_validation_empty_filter() {
        let config = LoggingConfig {
            filter: "  ".to_string(),
            json: true,
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogFilter));
    }
}
