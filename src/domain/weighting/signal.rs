//! Decision signal - One directional verdict from both columns of weights.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::weigh_items;
use crate::domain::foundation::{Side, Weight};

/// Below this magnitude the two sides are considered even.
pub const BALANCED_MAGNITUDE: f64 = 0.12;

/// Above this magnitude a lean becomes a strong verdict.
pub const STRONG_MAGNITUDE: f64 = 0.28;

/// The six verdict kinds, as exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    StronglyPositive,
    LeansPositive,
    Balanced,
    LeansNegative,
    StronglyNegative,
    Depends,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalKind::StronglyPositive => "strongly_positive",
            SignalKind::LeansPositive => "leans_positive",
            SignalKind::Balanced => "balanced",
            SignalKind::LeansNegative => "leans_negative",
            SignalKind::StronglyNegative => "strongly_negative",
            SignalKind::Depends => "depends",
        };
        write!(f, "{}", s)
    }
}

/// Why a strongly negative verdict was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NegativeDriver {
    /// A maximally weighted con not clearly outweighed by pros.
    CriticalRisk,
    /// The downsides outweigh the upsides by a wide margin.
    Outweighed,
}

/// Overall directional verdict for one option or yes/no decision.
///
/// Serializes as `{ "kind", "title", "explanation" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "SignalCard")]
pub enum DecisionSignal {
    StronglyPositive,
    LeansPositive,
    Balanced,
    LeansNegative,
    StronglyNegative(NegativeDriver),
    /// No items on either side.
    Depends,
}

impl DecisionSignal {
    /// Returns the wire kind.
    pub fn kind(&self) -> SignalKind {
        match self {
            DecisionSignal::StronglyPositive => SignalKind::StronglyPositive,
            DecisionSignal::LeansPositive => SignalKind::LeansPositive,
            DecisionSignal::Balanced => SignalKind::Balanced,
            DecisionSignal::LeansNegative => SignalKind::LeansNegative,
            DecisionSignal::StronglyNegative(_) => SignalKind::StronglyNegative,
            DecisionSignal::Depends => SignalKind::Depends,
        }
    }

    /// Returns the fixed title.
    pub fn title(&self) -> &'static str {
        match self {
            DecisionSignal::StronglyPositive => "Strongly positive",
            DecisionSignal::LeansPositive => "Leans positive",
            DecisionSignal::Balanced => "Balanced trade-off",
            DecisionSignal::LeansNegative => "Leans negative",
            DecisionSignal::StronglyNegative(_) => "Strongly negative",
            DecisionSignal::Depends => "Highly dependent on priorities",
        }
    }

    /// Returns the fixed, user-visible explanation.
    pub fn explanation(&self) -> &'static str {
        match self {
            DecisionSignal::StronglyPositive => {
                "Several meaningful benefits outweigh the risks in the current picture."
            }
            DecisionSignal::LeansPositive => {
                "The upside looks a bit heavier overall, with some risks to keep in view."
            }
            DecisionSignal::Balanced => {
                "The benefits and downsides look fairly even. Your priorities will likely decide this one."
            }
            DecisionSignal::LeansNegative => {
                "The risks look a bit heavier overall, even with some meaningful benefits present."
            }
            DecisionSignal::StronglyNegative(NegativeDriver::CriticalRisk) => {
                "One or more critical downsides carry outsized weight compared to the upside."
            }
            DecisionSignal::StronglyNegative(NegativeDriver::Outweighed) => {
                "The downsides outweigh the benefits in the current picture."
            }
            DecisionSignal::Depends => {
                "There isn\u{2019}t enough signal yet. Add more context if you want a clearer directional read."
            }
        }
    }
}

impl fmt::Display for DecisionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.explanation())
    }
}

/// Wire shape of a decision signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCard {
    pub kind: SignalKind,
    pub title: String,
    pub explanation: String,
}

impl From<DecisionSignal> for SignalCard {
    fn from(signal: DecisionSignal) -> Self {
        Self {
            kind: signal.kind(),
            title: signal.title().to_string(),
            explanation: signal.explanation().to_string(),
        }
    }
}

fn totals(weights: &[Weight]) -> (u32, u32) {
    let sum = weights.iter().map(|w| u32::from(w.value())).sum();
    let max = weights.iter().map(|w| u32::from(w.value())).max().unwrap_or(0);
    (sum, max)
}

/// Derives the decision signal from both columns of weights.
///
/// Precedence:
/// 1. No items at all: `Depends`
/// 2. A weight-5 con with `cons_total >= pros_total - 1`: strongly negative
/// 3. Magnitude `|pros - cons| / total` below 0.12: `Balanced`
/// 4. Otherwise lean or strong in the heavier direction; strong when the
///    magnitude exceeds 0.28 or that side has a weight-5 item
pub fn decision_signal_from_weights(pro_weights: &[Weight], con_weights: &[Weight]) -> DecisionSignal {
    let (pros_total, max_pro) = totals(pro_weights);
    let (cons_total, max_con) = totals(con_weights);
    let total = pros_total + cons_total;
    let max_weight = u32::from(Weight::MAX.value());

    if total == 0 {
        return DecisionSignal::Depends;
    }

    if max_con == max_weight && cons_total + 1 >= pros_total {
        return DecisionSignal::StronglyNegative(NegativeDriver::CriticalRisk);
    }

    let delta = i64::from(pros_total) - i64::from(cons_total);
    let magnitude = delta.unsigned_abs() as f64 / f64::from(total);

    if magnitude < BALANCED_MAGNITUDE {
        return DecisionSignal::Balanced;
    }

    if delta > 0 {
        if magnitude > STRONG_MAGNITUDE || max_pro == max_weight {
            DecisionSignal::StronglyPositive
        } else {
            DecisionSignal::LeansPositive
        }
    } else if magnitude > STRONG_MAGNITUDE || max_con == max_weight {
        DecisionSignal::StronglyNegative(NegativeDriver::Outweighed)
    } else {
        DecisionSignal::LeansNegative
    }
}

/// Weighs both lists against the same context and derives the signal.
pub fn decision_signal_for_items<P, C>(pros: &[P], cons: &[C], context_text: &str) -> DecisionSignal
where
    P: AsRef<str>,
    C: AsRef<str>,
{
    let pro_weights: Vec<Weight> = weigh_items(Side::Pros, pros, context_text)
        .into_iter()
        .map(|item| item.weight)
        .collect();
    let con_weights: Vec<Weight> = weigh_items(Side::Cons, cons, context_text)
        .into_iter()
        .map(|item| item.weight)
        .collect();

    decision_signal_from_weights(&pro_weights, &con_weights)
}
