//! Display configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Weight;

/// How weighted lists are presented. Never affects scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Lists with at least this many items are sorted strongest first
    #[serde(default = "default_sort_min_items")]
    pub sort_min_items: usize,

    /// Items at or above this weight are emphasized
    #[serde(default = "default_highlight_min_weight")]
    pub highlight_min_weight: u8,
}

impl DisplayConfig {
    /// Get the highlight threshold as a Weight
    pub fn highlight_weight(&self) -> Weight {
        Weight::clamped(i32::from(self.highlight_min_weight))
    }

    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sort_min_items == 0 {
            return Err(ValidationError::InvalidSortThreshold);
        }
        if Weight::try_new(self.highlight_min_weight).is_err() {
            return Err(ValidationError::InvalidHighlightWeight(
                self.highlight_min_weight,
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort_min_items: default_sort_min_items(),
            highlight_min_weight: default_highlight_min_weight(),
        }
    }
}

fn default_sort_min_items() -> usize {
    4
}

fn default_highlight_min_weight() -> u8 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.sort_min_items, 4);
        assert_eq!(config.highlight_weight().value(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_sort_threshold() {
        let config = DisplayConfig {
            sort_min_items: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSortThreshold));
    }

    #[test]
    fn test_validation_highlight_out_of_range() {
        let config = DisplayConfig {
            highlight_min_weight: 6,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidHighlightWeight(6))
        );
    }

    #[test]
    fn test_display_deserialization() {
        let json = r#"{ "sort_min_items": 2 }"#;
        let config: DisplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sort_min_items, 2);
        assert_eq!(config.highlight_min_weight, 4);
    }
}
