//! Skill rubric definitions and the recommendation engine that reads them.
//!
//! A rubric is an ordered list of skill categories. Each category carries an ordered list of
//! score-bound rules; the first rule whose bound covers a score supplies the coaching tip for
//! that category. Definitions are immutable once loaded and are shared through [`RubricStore`].

mod engine;
mod loader;
mod scores;
mod standard;
mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use engine::{evaluate, evaluate_detailed, Recommendation};
pub use loader::{RubricLoadError, RubricSource};
pub use scores::{ScoreRange, ScoreValidationError};
pub use store::RubricStore;

/// Caller-supplied score per category key for a single evaluation.
pub type EvaluationValues = BTreeMap<String, i32>;

/// Complete rubric configuration. Category order drives output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricDefinition {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// One skill dimension being evaluated, e.g. batting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Inclusive upper score bound paired with the tip shown when it is the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub max_score: i32,
    pub text: String,
}

impl RubricDefinition {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            rules,
        }
    }

    /// First rule, in declared order, whose bound covers `score`.
    pub fn matching_rule(&self, score: i32) -> Option<&Rule> {
        self.rules.iter().find(|rule| score <= rule.max_score)
    }
}

impl Rule {
    pub fn new(max_score: i32, text: impl Into<String>) -> Self {
        Self {
            max_score,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_rule_respects_declared_order() {
        let category = Category::new(
            "batting",
            "Batting",
            vec![Rule::new(10, "loose"), Rule::new(3, "tight")],
        );

        let rule = category.matching_rule(2).expect("a rule matches");
        assert_eq!(rule.text, "loose");
    }

    #[test]
    fn emptiness_tracks_categories() {
        let rubric = RubricDefinition::new(vec![Category::new("iq", "Baseball IQ", Vec::new())]);

        assert!(!rubric.is_empty());
        assert!(RubricDefinition::default().is_empty());
    }
}
