//! Adapters - Implementations of port interfaces.
//!
//! - `decision_file` - Decision documents on disk (JSON or YAML)

mod decision_file;

pub use decision_file::{DecisionFormat, FileDecisionSource};
