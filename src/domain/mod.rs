//! Domain layer containing the weighting engine and its value objects.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (side, weight, errors)
//! - `weighting` - Pure scoring of pros/cons into weights, summaries and a signal

pub mod foundation;
pub mod weighting;
