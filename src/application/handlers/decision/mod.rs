//! Decision handlers.
//!
//! Runs the weighting engine over a whole decision.

mod analyze_decision;

pub use analyze_decision::{
    AnalysisError, AnalyzeDecisionCommand, AnalyzeDecisionHandler, AnalyzeDecisionResult,
    Decision, DecisionOption, DisplayedItem, OptionAnalysis, SectionAnalysis,
};
