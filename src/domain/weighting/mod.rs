//! Weighting Module - Heuristic scoring of pros and cons.
//!
//! Turns free-text statements into weighted items, section summaries and a
//! decision signal. Data flows one way:
//!
//! raw strings -> `WeightedItem`s -> `SectionSummary` -> `DecisionSignal`
//!
//! # Components
//!
//! - `lexicon` - Fixed keyword tables (intensity, certainty, topics, priority phrases)
//! - `wording` - Lexical scorer for a single statement
//! - `context` - Context-bias scorer against the user's stated priorities
//! - `item` - Item weigher, labels and display ordering
//! - `summary` - Section summarizer
//! - `signal` - Overall decision signal
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. There are no caches or singletons;
//! every call is independent and safe to run concurrently.

mod context;
mod item;
mod lexicon;
mod signal;
mod summary;
mod wording;

pub use context::{context_text_from_answers, score_from_context, ContextProfile, TopicBias};
pub use item::{
    display_order, estimate_item_weight, impact_label_for, weigh_items, ImpactLabel, WeightedItem,
};
pub use lexicon::{
    wording_lexicon, Topic, TopicKey, WordingLexicon, AMPLIFY_PHRASES, CERTAINTY_BOOSTERS,
    CONS_WORDING, PROS_WORDING, SUPPRESS_PHRASES, TOPICS, UNCERTAINTY_REDUCERS,
};
pub use signal::{
    decision_signal_for_items, decision_signal_from_weights, DecisionSignal, NegativeDriver,
    SignalCard, SignalKind, BALANCED_MAGNITUDE, STRONG_MAGNITUDE,
};
pub use summary::{summarize_section, SectionSummary, SectionSummaryLabel};
pub use wording::score_from_wording;
