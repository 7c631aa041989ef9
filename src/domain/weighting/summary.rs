//! Section summarizer - One representative weight for a pros or cons column.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Side, Weight};

/// Section-level label for a column of weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionSummaryLabel {
    #[serde(rename = "Overall impact: Weak")]
    ImpactWeak,
    #[serde(rename = "Overall impact: Moderate")]
    ImpactModerate,
    #[serde(rename = "Overall impact: Strong")]
    ImpactStrong,
    #[serde(rename = "Overall risk: Low")]
    RiskLow,
    #[serde(rename = "Overall risk: Manageable")]
    RiskManageable,
    #[serde(rename = "Overall risk: Critical")]
    RiskCritical,
}

impl SectionSummaryLabel {
    /// Labels a summary weight for a side, same thresholds as item labels.
    pub fn for_weight(side: Side, weight: Weight) -> Self {
        match (side, weight.value()) {
            (Side::Pros, 0..=2) => SectionSummaryLabel::ImpactWeak,
            (Side::Pros, 3) => SectionSummaryLabel::ImpactModerate,
            (Side::Pros, _) => SectionSummaryLabel::ImpactStrong,
            (Side::Cons, 0..=2) => SectionSummaryLabel::RiskLow,
            (Side::Cons, 3) => SectionSummaryLabel::RiskManageable,
            (Side::Cons, _) => SectionSummaryLabel::RiskCritical,
        }
    }

    /// Returns the display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionSummaryLabel::ImpactWeak => "Overall impact: Weak",
            SectionSummaryLabel::ImpactModerate => "Overall impact: Moderate",
            SectionSummaryLabel::ImpactStrong => "Overall impact: Strong",
            SectionSummaryLabel::RiskLow => "Overall risk: Low",
            SectionSummaryLabel::RiskManageable => "Overall risk: Manageable",
            SectionSummaryLabel::RiskCritical => "Overall risk: Critical",
        }
    }
}

impl fmt::Display for SectionSummaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate weight and label for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub summary_weight: Weight,
    pub label: SectionSummaryLabel,
}

impl SectionSummary {
    /// Neutral summary for a column with no items.
    pub fn neutral(side: Side) -> Self {
        Self {
            summary_weight: Weight::NEUTRAL,
            label: SectionSummaryLabel::for_weight(side, Weight::NEUTRAL),
        }
    }
}

/// Collapses a column of weights into one representative weight.
///
/// The summary is `round((mean + max) / 2)`, which leans toward the strongest
/// item so a single critical entry is not diluted by several mild ones.
///
/// # Edge Cases
/// - Empty weights: neutral weight 3 with the moderate/manageable label
pub fn summarize_section(side: Side, weights: &[Weight]) -> SectionSummary {
    let Some(max) = weights.iter().max() else {
        return SectionSummary::neutral(side);
    };

    let total: u32 = weights.iter().map(|w| u32::from(w.value())).sum();
    let mean = f64::from(total) / weights.len() as f64;
    let blended = (mean + f64::from(max.value())) / 2.0;

    // Inputs are within 1..=5, so the blend is too; rounds half away from zero.
    let summary_weight = Weight::clamped(blended.round() as i32);

    SectionSummary {
        summary_weight,
        label: SectionSummaryLabel::for_weight(side, summary_weight),
    }
}
