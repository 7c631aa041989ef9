//! Lexicon tables - Fixed keyword data consumed by the scorers.
//!
//! Every table is a plain constant. Scoring control flow lives in
//! `wording` and `context`; this module only answers "which words".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Side;

/// Intensity cues for one side: boosters raise the score, reducers lower it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordingLexicon {
    /// Words signalling a strong upside (pros) or a severe downside (cons).
    pub boosters: &'static [&'static str],
    /// Delta added when any booster matches.
    pub booster_delta: i32,
    /// Words signalling a mild or small effect.
    pub reducers: &'static [&'static str],
}

/// Strong upside language.
pub const PROS_WORDING: WordingLexicon = WordingLexicon {
    boosters: &[
        "major",
        "significant",
        "substantial",
        "huge",
        "massive",
        "meaningful",
        "life-changing",
        "game changer",
        "great",
        "excellent",
        "high impact",
        "strong benefit",
    ],
    booster_delta: 1,
    reducers: &[
        "minor",
        "small",
        "slight",
        "nice to have",
        "convenient",
        "somewhat",
        "a bit",
    ],
};

/// Severity and danger language. Boosts harder than pros.
pub const CONS_WORDING: WordingLexicon = WordingLexicon {
    boosters: &[
        "critical",
        "severe",
        "serious",
        "deal-breaker",
        "dealbreaker",
        "unsafe",
        "danger",
        "harm",
        "toxic",
        "burnout",
        "illegal",
        "catastrophic",
        "unaffordable",
        "very expensive",
    ],
    booster_delta: 2,
    reducers: &[
        "minor",
        "small",
        "slight",
        "manageable",
        "inconvenient",
        "somewhat",
        "a bit",
    ],
};

/// Definite language, applies to both sides.
pub const CERTAINTY_BOOSTERS: &[&str] = &["will", "always", "never", "definitely", "certainly"];

/// Hedging language, applies to both sides.
pub const UNCERTAINTY_REDUCERS: &[&str] = &["maybe", "might", "could", "unclear", "unknown", "depends"];

/// Returns the intensity lexicon for a side.
pub fn wording_lexicon(side: Side) -> &'static WordingLexicon {
    match side {
        Side::Pros => &PROS_WORDING,
        Side::Cons => &CONS_WORDING,
    }
}

/// Life areas a decision can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKey {
    Money,
    Time,
    Flexibility,
    Health,
    Family,
    Career,
    Learning,
    Location,
    Stability,
    Stress,
}

impl TopicKey {
    /// Returns the wire name of this topic.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKey::Money => "money",
            TopicKey::Time => "time",
            TopicKey::Flexibility => "flexibility",
            TopicKey::Health => "health",
            TopicKey::Family => "family",
            TopicKey::Career => "career",
            TopicKey::Learning => "learning",
            TopicKey::Location => "location",
            TopicKey::Stability => "stability",
            TopicKey::Stress => "stress",
        }
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A topic and the keywords that mention it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub key: TopicKey,
    pub keywords: &'static [&'static str],
}

impl Topic {
    /// Returns true if normalized text mentions this topic.
    pub fn is_mentioned_in(&self, normalized: &str) -> bool {
        contains_any(normalized, self.keywords)
    }
}

pub const TOPICS: &[Topic] = &[
    Topic {
        key: TopicKey::Money,
        keywords: &["salary", "pay", "compensation", "money", "income", "bonus", "cost", "expensive"],
    },
    Topic {
        key: TopicKey::Time,
        keywords: &["time", "hours", "schedule", "commute", "deadline"],
    },
    Topic {
        key: TopicKey::Flexibility,
        keywords: &["flexible", "flexibility", "remote", "hybrid", "autonomy"],
    },
    Topic {
        key: TopicKey::Health,
        keywords: &["health", "sleep", "mental", "well-being", "wellbeing"],
    },
    Topic {
        key: TopicKey::Family,
        keywords: &["family", "kids", "child", "partner", "spouse"],
    },
    Topic {
        key: TopicKey::Career,
        keywords: &["career", "growth", "promotion", "title", "trajectory"],
    },
    Topic {
        key: TopicKey::Learning,
        keywords: &["learn", "learning", "skills", "mentor", "mentorship", "experience"],
    },
    Topic {
        key: TopicKey::Location,
        keywords: &["location", "move", "relocate", "city", "travel"],
    },
    Topic {
        key: TopicKey::Stability,
        keywords: &["stability", "stable", "security", "secure", "layoff"],
    },
    Topic {
        key: TopicKey::Stress,
        keywords: &["stress", "pressure", "burnout", "work-life", "work life", "balance"],
    },
];

/// Phrases marking something as a high priority.
pub const AMPLIFY_PHRASES: &[&str] = &[
    "most important",
    "top priority",
    "really care",
    "care a lot",
    "value",
    "matters a lot",
    "non-negotiable",
    "non negotiable",
    "nonnegotiable",
];

/// Phrases marking something as a low priority.
pub const SUPPRESS_PHRASES: &[&str] = &[
    "not important",
    "don't care",
    "doesn't matter",
    "no big deal",
    "not a priority",
];

/// Trims and lowercases text before matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Substring containment of any needle.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cons_boosters_outweigh_pros_boosters() {
        assert_eq!(PROS_WORDING.booster_delta, 1);
        assert_eq!(CONS_WORDING.booster_delta, 2);
    }

    #[test]
    fn wording_lexicon_selects_by_side() {
        assert_eq!(wording_lexicon(Side::Pros), &PROS_WORDING);
        assert_eq!(wording_lexicon(Side::Cons), &CONS_WORDING);
    }

    #[test]
    fn every_keyword_is_already_normalized() {
        let all = TOPICS
            .iter()
            .flat_map(|t| t.keywords.iter())
            .chain(PROS_WORDING.boosters)
            .chain(PROS_WORDING.reducers)
            .chain(CONS_WORDING.boosters)
            .chain(CONS_WORDING.reducers)
            .chain(CERTAINTY_BOOSTERS)
            .chain(UNCERTAINTY_REDUCERS)
            .chain(AMPLIFY_PHRASES)
            .chain(SUPPRESS_PHRASES);

        for keyword in all {
            assert_eq!(normalize(keyword), *keyword, "keyword '{}' not normalized", keyword);
        }
    }

    #[test]
    fn topics_cover_ten_distinct_keys() {
        let keys: HashSet<_> = TOPICS.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), 10);
        assert!(TOPICS.iter().all(|t| !t.keywords.is_empty()));
    }

    #[test]
    fn topic_mention_uses_substring_match() {
        let money = TOPICS.iter().find(|t| t.key == TopicKey::Money).unwrap();
        assert!(money.is_mentioned_in("the bonus structure"));
        assert!(!money.is_mentioned_in("the office view"));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Huge RAISE \n"), "huge raise");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn contains_any_with_no_needles_is_false() {
        assert!(!contains_any("anything", &[]));
    }

    #[test]
    fn topic_key_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&TopicKey::Money).unwrap(), "\"money\"");
        assert_eq!(format!("{}", TopicKey::Stress), "stress");
    }
}
