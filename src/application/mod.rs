//! Application layer - Commands and Handlers.
//!
//! This layer runs the weighting engine over whole decisions. It performs no
//! I/O; reading decision documents is left to the binary.

pub mod handlers;

pub use handlers::{
    AnalysisError, AnalyzeDecisionCommand, AnalyzeDecisionHandler, AnalyzeDecisionResult,
    Decision, DecisionOption, DisplayedItem, OptionAnalysis, SectionAnalysis,
};
