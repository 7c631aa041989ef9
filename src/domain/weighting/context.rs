//! Context-bias scorer - Topic relevance against the user's stated priorities.
//!
//! The context blob is free text assembled from clarifying answers. A topic
//! mentioned in the context is flagged "amplify" when the context contains a
//! high-priority phrase and "suppress" when it contains a low-priority phrase.
//! Phrase detection is context-wide: it does not try to attribute a phrase to
//! the nearest topic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use super::lexicon::{contains_any, normalize, TopicKey, AMPLIFY_PHRASES, SUPPRESS_PHRASES, TOPICS};

/// Priority flags for one topic. Both may be set by contradictory context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicBias {
    pub amplify: bool,
    pub suppress: bool,
}

impl TopicBias {
    /// Net contribution to an item that mentions this topic.
    pub fn delta(&self) -> i32 {
        i32::from(self.amplify) - i32::from(self.suppress)
    }
}

/// Topic biases derived once from a context blob, reusable across items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextProfile {
    biases: BTreeMap<TopicKey, TopicBias>,
}

impl ContextProfile {
    /// Scans the context for mentioned topics and priority phrases.
    ///
    /// Empty context yields an empty profile without scanning topics.
    pub fn from_context_text(context_text: &str) -> Self {
        let ctx = normalize(context_text);
        if ctx.is_empty() {
            return Self::default();
        }

        let amplify = contains_any(&ctx, AMPLIFY_PHRASES);
        let suppress = contains_any(&ctx, SUPPRESS_PHRASES);

        let biases = TOPICS
            .iter()
            .filter(|topic| topic.is_mentioned_in(&ctx))
            .map(|topic| (topic.key, TopicBias { amplify, suppress }))
            .collect();

        Self { biases }
    }

    /// Returns true if the context mentioned no known topic.
    pub fn is_empty(&self) -> bool {
        self.biases.is_empty()
    }

    /// Returns the bias for a topic, if the context mentioned it.
    pub fn bias_for(&self, topic: TopicKey) -> Option<TopicBias> {
        self.biases.get(&topic).copied()
    }

    /// Iterates mentioned topics in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (TopicKey, TopicBias)> + '_ {
        self.biases.iter().map(|(key, bias)| (*key, *bias))
    }

    /// Sums the bias of every topic the item mentions.
    pub fn score(&self, item_text: &str) -> i32 {
        if self.is_empty() {
            return 0;
        }

        let item = normalize(item_text);
        let delta: i32 = TOPICS
            .iter()
            .filter(|topic| topic.is_mentioned_in(&item))
            .filter_map(|topic| self.bias_for(topic.key))
            .map(|bias| bias.delta())
            .sum();

        trace!(delta, "scored context bias");
        delta
    }
}

/// Scores one statement against a context blob.
///
/// Returns 0 for empty context. Callers weighing many statements against the
/// same context should build a [`ContextProfile`] once instead.
pub fn score_from_context(item_text: &str, context_text: &str) -> i32 {
    ContextProfile::from_context_text(context_text).score(item_text)
}

/// Joins clarifying answers into a context blob.
///
/// Answers are trimmed, blank ones dropped, order preserved, one per line.
pub fn context_text_from_answers<I, S>(answers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    answers
        .into_iter()
        .filter_map(|answer| {
            let trimmed = answer.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
