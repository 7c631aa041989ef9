//! Item weigher - Baseline plus wording and context deltas, clamped to 1..=5.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::context::ContextProfile;
use super::wording::score_from_wording;
use crate::domain::foundation::{Side, Weight};

/// Side-dependent tag for a single weighted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactLabel {
    #[serde(rename = "Low impact")]
    LowImpact,
    #[serde(rename = "Moderate impact")]
    ModerateImpact,
    #[serde(rename = "High impact")]
    HighImpact,
    #[serde(rename = "Minor risk")]
    MinorRisk,
    #[serde(rename = "Significant risk")]
    SignificantRisk,
    #[serde(rename = "Critical risk")]
    CriticalRisk,
}

impl ImpactLabel {
    /// Labels a weight for a side: 1-2 low, 3 moderate, 4-5 high.
    pub fn for_weight(side: Side, weight: Weight) -> Self {
        match (side, weight.value()) {
            (Side::Pros, 0..=2) => ImpactLabel::LowImpact,
            (Side::Pros, 3) => ImpactLabel::ModerateImpact,
            (Side::Pros, _) => ImpactLabel::HighImpact,
            (Side::Cons, 0..=2) => ImpactLabel::MinorRisk,
            (Side::Cons, 3) => ImpactLabel::SignificantRisk,
            (Side::Cons, _) => ImpactLabel::CriticalRisk,
        }
    }

    /// Returns the display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLabel::LowImpact => "Low impact",
            ImpactLabel::ModerateImpact => "Moderate impact",
            ImpactLabel::HighImpact => "High impact",
            ImpactLabel::MinorRisk => "Minor risk",
            ImpactLabel::SignificantRisk => "Significant risk",
            ImpactLabel::CriticalRisk => "Critical risk",
        }
    }
}

impl fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the impact label for a side and weight.
pub fn impact_label_for(side: Side, weight: Weight) -> ImpactLabel {
    ImpactLabel::for_weight(side, weight)
}

/// One statement with its derived weight.
///
/// `original_index` is the statement's position in the input and stays a
/// stable identity key however the caller reorders the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedItem {
    pub text: String,
    pub weight: Weight,
    pub label: ImpactLabel,
    pub original_index: usize,
}

impl WeightedItem {
    /// Returns true if this item should be visually emphasized.
    pub fn is_highlighted(&self, min_weight: Weight) -> bool {
        self.weight >= min_weight
    }

    /// Returns true for a maximally weighted con.
    pub fn is_critical(&self, side: Side) -> bool {
        side == Side::Cons && self.weight.is_max()
    }
}

/// Estimates the weight of one statement.
///
/// Starts from the neutral midpoint, adds the wording and context deltas,
/// then clamps into 1..=5.
pub fn estimate_item_weight(side: Side, item_text: &str, context_text: &str) -> Weight {
    let profile = ContextProfile::from_context_text(context_text);
    estimate_with_profile(side, item_text, &profile)
}

fn estimate_with_profile(side: Side, item_text: &str, profile: &ContextProfile) -> Weight {
    let score = i32::from(Weight::NEUTRAL.value())
        + score_from_wording(item_text, side)
        + profile.score(item_text);
    Weight::clamped(score)
}

/// Weighs an ordered sequence of statements against one context.
///
/// Output order matches input order and `original_index` equals position.
pub fn weigh_items<S: AsRef<str>>(side: Side, items: &[S], context_text: &str) -> Vec<WeightedItem> {
    let profile = ContextProfile::from_context_text(context_text);

    items
        .iter()
        .enumerate()
        .map(|(original_index, text)| {
            let text = text.as_ref();
            let weight = estimate_with_profile(side, text, &profile);
            WeightedItem {
                text: text.to_string(),
                weight,
                label: impact_label_for(side, weight),
                original_index,
            }
        })
        .collect()
}

/// Reorders items for display without touching `original_index`.
///
/// Lists with at least `sort_min_items` entries are sorted strongest first,
/// ties broken by original position. Shorter lists keep input order.
pub fn display_order(items: &[WeightedItem], sort_min_items: usize) -> Vec<WeightedItem> {
    let mut ordered = items.to_vec();
    if ordered.len() >= sort_min_items {
        ordered.sort_by(|a, b| {
            b.weight
                .cmp(&a.weight)
                .then_with(|| a.original_index.cmp(&b.original_index))
        });
    }
    ordered
}
