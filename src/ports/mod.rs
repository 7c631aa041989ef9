//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `DecisionSource` - Where a decision document comes from

mod decision_source;

pub use decision_source::{DecisionSource, SourceError};
