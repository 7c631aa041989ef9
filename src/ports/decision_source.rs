//! DecisionSource port - Interface for obtaining a decision to analyze.
//!
//! The pros and cons are produced elsewhere (typically by a text-generation
//! service). This port only hands the finished decision to the application.

use thiserror::Error;

use crate::application::AnalyzeDecisionCommand;

/// Errors raised while obtaining a decision.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read decision: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON decision: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed YAML decision: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported decision format: {0}")]
    UnsupportedFormat(String),
}

/// Port for loading a decision.
///
/// Implementations are synchronous; the engine has no suspension points and
/// a source is read once per run.
pub trait DecisionSource: Send + Sync {
    /// Load the decision and clarifying answers.
    fn load(&self) -> Result<AnalyzeDecisionCommand, SourceError>;
}
