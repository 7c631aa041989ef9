//! Weight value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Strength of a single pro or con: 1 (weakest) to 5 (strongest).
///
/// The scale is shared by both sides. For pros it reads as impact, for cons
/// as risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    /// Lowest weight.
    pub const MIN: Self = Self(1);

    /// Neutral midpoint, used as the scoring baseline.
    pub const NEUTRAL: Self = Self(3);

    /// Highest weight.
    pub const MAX: Self = Self(5);

    /// Creates a Weight, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weight",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Clamps an arbitrary score into the 1..=5 range.
    pub fn clamped(score: i32) -> Self {
        // The clamp bounds fit in u8.
        Self(score.clamp(i32::from(Self::MIN.0), i32::from(Self::MAX.0)) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Number of filled segments on a five-segment impact bar.
    pub fn filled_segments(&self) -> usize {
        usize::from(self.0)
    }

    /// Returns true for the strongest possible weight.
    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
