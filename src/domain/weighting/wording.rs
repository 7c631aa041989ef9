//! Lexical scorer - Intensity and certainty cues in a single statement.

use tracing::trace;

use super::lexicon::{
    contains_any, normalize, wording_lexicon, CERTAINTY_BOOSTERS, UNCERTAINTY_REDUCERS,
};
use crate::domain::foundation::Side;

/// Scores the wording of one statement, independent of context.
///
/// Each lexicon contributes at most once no matter how many of its keywords
/// appear. Boosters and reducers are independent, so "might be a huge help"
/// triggers both. The result falls in `-2..=3`.
pub fn score_from_wording(text: &str, side: Side) -> i32 {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return 0;
    }

    let lexicon = wording_lexicon(side);
    let mut delta = 0;

    if contains_any(&normalized, lexicon.boosters) {
        delta += lexicon.booster_delta;
    }
    if contains_any(&normalized, lexicon.reducers) {
        delta -= 1;
    }
    if contains_any(&normalized, CERTAINTY_BOOSTERS) {
        delta += 1;
    }
    if contains_any(&normalized, UNCERTAINTY_REDUCERS) {
        delta -= 1;
    }

    trace!(side = %side, delta, "scored wording");
    delta
}
