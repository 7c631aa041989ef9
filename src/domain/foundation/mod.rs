//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the weighting engine.

mod errors;
mod side;
mod weight;

pub use errors::ValidationError;
pub use side::Side;
pub use weight::Weight;
