//! AnalyzeDecisionHandler - Command handler that weighs every pros/cons list
//! of a decision and derives one signal per option.
//!
//! The pros and cons themselves come from an external text-generation
//! collaborator; this handler only scores what it is given.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::domain::foundation::{Side, ValidationError, Weight};
use crate::domain::weighting::{
    context_text_from_answers, decision_signal_from_weights, display_order, summarize_section,
    weigh_items, DecisionSignal, SectionSummary, WeightedItem,
};

/// One option of a decision with its generated pros and cons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub name: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// The shape of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Should I do this or not?
    YesNo {
        #[serde(default)]
        pros: Vec<String>,
        #[serde(default)]
        cons: Vec<String>,
    },
    /// Which of two named options?
    TwoOption {
        option_a: DecisionOption,
        option_b: DecisionOption,
    },
}

/// Command to analyze a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeDecisionCommand {
    #[serde(flatten)]
    pub decision: Decision,
    /// Answers to clarifying questions, in question order.
    #[serde(default)]
    pub answers: Vec<String>,
}

/// A weighted item with its presentation flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedItem {
    #[serde(flatten)]
    pub item: WeightedItem,
    pub highlighted: bool,
    pub critical: bool,
}

/// One weighed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAnalysis {
    pub side: Side,
    /// Items in display order; `original_index` keeps input identity.
    pub items: Vec<DisplayedItem>,
    pub summary: SectionSummary,
}

impl SectionAnalysis {
    /// Weights in input order.
    pub fn weights(&self) -> Vec<Weight> {
        let mut by_index: Vec<_> = self
            .items
            .iter()
            .map(|d| (d.item.original_index, d.item.weight))
            .collect();
        by_index.sort_by_key(|(index, _)| *index);
        by_index.into_iter().map(|(_, weight)| weight).collect()
    }
}

/// Analysis of one option (or the single yes/no question).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionAnalysis {
    /// Option name; `None` for a yes/no decision.
    pub name: Option<String>,
    pub pros: SectionAnalysis,
    pub cons: SectionAnalysis,
    pub signal: DecisionSignal,
}

/// Result of a successful decision analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeDecisionResult {
    /// Context blob assembled from the answers.
    pub context_text: String,
    pub options: Vec<OptionAnalysis>,
}

/// Errors for structurally invalid decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Invalid decision: {0}")]
    Invalid(#[from] ValidationError),
}

/// Handler for analyzing decisions.
pub struct AnalyzeDecisionHandler {
    display: DisplayConfig,
}

impl AnalyzeDecisionHandler {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn handle(&self, cmd: AnalyzeDecisionCommand) -> Result<AnalyzeDecisionResult, AnalysisError> {
        // 1. Validate structure
        if let Decision::TwoOption { option_a, option_b } = &cmd.decision {
            ensure_named(option_a, "option_a.name")?;
            ensure_named(option_b, "option_b.name")?;
        }

        // 2. Assemble context from answers
        let context_text = context_text_from_answers(&cmd.answers);
        debug!(
            answers = cmd.answers.len(),
            context_len = context_text.len(),
            "Assembled decision context"
        );

        // 3. Weigh every option
        let options = match &cmd.decision {
            Decision::YesNo { pros, cons } => {
                vec![self.analyze_option(None, pros, cons, &context_text)]
            }
            Decision::TwoOption { option_a, option_b } => vec![
                self.analyze_option(
                    Some(option_a.name.trim()),
                    &option_a.pros,
                    &option_a.cons,
                    &context_text,
                ),
                self.analyze_option(
                    Some(option_b.name.trim()),
                    &option_b.pros,
                    &option_b.cons,
                    &context_text,
                ),
            ],
        };

        info!(options = options.len(), "Analyzed decision");

        Ok(AnalyzeDecisionResult {
            context_text,
            options,
        })
    }

    fn analyze_option(
        &self,
        name: Option<&str>,
        pros: &[String],
        cons: &[String],
        context_text: &str,
    ) -> OptionAnalysis {
        let pros = self.analyze_section(Side::Pros, pros, context_text);
        let cons = self.analyze_section(Side::Cons, cons, context_text);
        let signal = decision_signal_from_weights(&pros.weights(), &cons.weights());

        debug!(
            option = name.unwrap_or("yes/no"),
            pros = pros.items.len(),
            cons = cons.items.len(),
            signal = %signal.kind(),
            "Derived decision signal"
        );

        OptionAnalysis {
            name: name.map(str::to_string),
            pros,
            cons,
            signal,
        }
    }

    fn analyze_section(&self, side: Side, items: &[String], context_text: &str) -> SectionAnalysis {
        let weighted = weigh_items(side, items, context_text);
        let weights: Vec<_> = weighted.iter().map(|item| item.weight).collect();
        let summary = summarize_section(side, &weights);
        let highlight = self.display.highlight_weight();

        let items = display_order(&weighted, self.display.sort_min_items)
            .into_iter()
            .map(|item| DisplayedItem {
                highlighted: item.is_highlighted(highlight),
                critical: item.is_critical(side),
                item,
            })
            .collect();

        SectionAnalysis {
            side,
            items,
            summary,
        }
    }
}

fn ensure_named(option: &DecisionOption, field: &str) -> Result<(), ValidationError> {
    if option.name.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weighting::{ImpactLabel, NegativeDriver, SectionSummaryLabel, SignalKind};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn handler() -> AnalyzeDecisionHandler {
        AnalyzeDecisionHandler::new(DisplayConfig::default())
    }

    fn yes_no(pros: &[&str], cons: &[&str], answers: &[&str]) -> AnalyzeDecisionCommand {
        AnalyzeDecisionCommand {
            decision: Decision::YesNo {
                pros: strings(pros),
                cons: strings(cons),
            },
            answers: strings(answers),
        }
    }

    #[test]
    fn yes_no_produces_single_unnamed_option() {
        let result = handler()
            .handle(yes_no(&["Huge raise"], &["Longer commute"], &[]))
            .unwrap();

        assert_eq!(result.options.len(), 1);
        let option = &result.options[0];
        assert_eq!(option.name, None);
        assert_eq!(option.pros.items[0].item.label, ImpactLabel::HighImpact);
        assert_eq!(option.cons.items[0].item.label, ImpactLabel::SignificantRisk);
    }

    #[test]
    fn empty_decision_depends() {
        let result = handler().handle(yes_no(&[], &[], &[])).unwrap();
        let option = &result.options[0];

        assert_eq!(option.signal, DecisionSignal::Depends);
        assert_eq!(option.pros.summary.label, SectionSummaryLabel::ImpactModerate);
        assert_eq!(option.cons.summary.label, SectionSummaryLabel::RiskManageable);
    }

    #[test]
    fn answers_feed_context() {
        let result = handler()
            .handle(yes_no(
                &["Better pay"],
                &[],
                &["  Salary matters a lot  ", "", "Kids are settled"],
            ))
            .unwrap();

        assert_eq!(result.context_text, "Salary matters a lot\nKids are settled");
        // 3 + 1 (money amplified)
        assert_eq!(result.options[0].pros.items[0].item.weight.value(), 4);
    }

    #[test]
    fn critical_con_overrides_signal() {
        let result = handler()
            .handle(yes_no(&["Nicer desk", "Free lunch"], &["Unsafe neighborhood"], &[]))
            .unwrap();

        let option = &result.options[0];
        assert_eq!(
            option.signal,
            DecisionSignal::StronglyNegative(NegativeDriver::CriticalRisk)
        );
        assert!(option.cons.items[0].critical);
        assert!(option.cons.items[0].highlighted);
    }

    #[test]
    fn long_lists_are_display_sorted() {
        let result = handler()
            .handle(yes_no(
                &["Nicer desk", "Huge raise", "Slight perk", "Great team"],
                &[],
                &[],
            ))
            .unwrap();

        let indexes: Vec<_> = result.options[0]
            .pros
            .items
            .iter()
            .map(|d| d.item.original_index)
            .collect();
        assert_eq!(indexes, vec![1, 3, 0, 2]);
        // Weights are reported back in input order.
        let weights: Vec<_> = result.options[0].pros.weights().iter().map(|w| w.value()).collect();
        assert_eq!(weights, vec![3, 4, 2, 4]);
    }

    #[test]
    fn two_option_yields_named_signals() {
        let cmd = AnalyzeDecisionCommand {
            decision: Decision::TwoOption {
                option_a: DecisionOption {
                    name: " Startup ".to_string(),
                    pros: strings(&["Massive learning curve"]),
                    cons: strings(&["Serious layoff risk"]),
                },
                option_b: DecisionOption {
                    name: "Bank".to_string(),
                    pros: strings(&["Stable income", "Great benefits"]),
                    cons: strings(&["Slight boredom"]),
                },
            },
            answers: vec![],
        };

        let result = handler().handle(cmd).unwrap();
        assert_eq!(result.options.len(), 2);
        assert_eq!(result.options[0].name.as_deref(), Some("Startup"));
        assert_eq!(result.options[0].signal.kind(), SignalKind::StronglyNegative);
        assert_eq!(result.options[1].name.as_deref(), Some("Bank"));
        assert_eq!(result.options[1].signal.kind(), SignalKind::StronglyPositive);
    }

    #[test]
    fn two_option_requires_names() {
        let cmd = AnalyzeDecisionCommand {
            decision: Decision::TwoOption {
                option_a: DecisionOption {
                    name: "Stay".to_string(),
                    pros: vec![],
                    cons: vec![],
                },
                option_b: DecisionOption {
                    name: "   ".to_string(),
                    pros: vec![],
                    cons: vec![],
                },
            },
            answers: vec![],
        };

        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Invalid(ValidationError::empty_field("option_b.name"))
        );
        assert_eq!(
            err.to_string(),
            "Invalid decision: Field 'option_b.name' cannot be empty"
        );
    }

    #[test]
    fn command_deserializes_tagged_decision() {
        let json = r#"{
            "decision_type": "TWO_OPTION",
            "option_a": { "name": "Move", "pros": ["Bigger city"] },
            "option_b": { "name": "Stay", "cons": ["Same routine"] },
            "answers": ["Family is most important"]
        }"#;

        let cmd: AnalyzeDecisionCommand = serde_json::from_str(json).unwrap();
        match &cmd.decision {
            Decision::TwoOption { option_a, option_b } => {
                assert_eq!(option_a.pros, vec!["Bigger city".to_string()]);
                assert!(option_a.cons.is_empty());
                assert_eq!(option_b.name, "Stay");
            }
            other => panic!("Expected TwoOption, got {:?}", other),
        }
        assert_eq!(cmd.answers.len(), 1);
    }

    #[test]
    fn result_serializes_flattened_items() {
        let result = handler().handle(yes_no(&["Huge raise"], &[], &[])).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        let item = &json["options"][0]["pros"]["items"][0];

        assert_eq!(item["text"], "Huge raise");
        assert_eq!(item["originalIndex"], 0);
        assert_eq!(item["highlighted"], true);
        assert_eq!(json["options"][0]["signal"]["kind"], "strongly_positive");
    }
}
