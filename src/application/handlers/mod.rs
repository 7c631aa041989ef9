//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{
    AnalysisError, AnalyzeDecisionCommand, AnalyzeDecisionHandler, AnalyzeDecisionResult,
    Decision, DecisionOption, DisplayedItem, OptionAnalysis, SectionAnalysis,
};
