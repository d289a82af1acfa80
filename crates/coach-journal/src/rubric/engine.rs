use serde::{Deserialize, Serialize};

use super::{EvaluationValues, RubricDefinition};

/// Structured form of a selected tip, kept for audit trails and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category_key: String,
    pub label: String,
    pub score: i32,
    pub max_score: i32,
    pub text: String,
}

impl Recommendation {
    /// `"<label>: <text>"`, the display form returned by [`evaluate`].
    pub fn formatted(&self) -> String {
        format!("{}: {}", self.label, self.text)
    }
}

/// Map evaluation scores to coaching tips, one per category that has both a score and a
/// matching rule, in rubric category order.
///
/// Categories without a score, scores that no rule covers, and keys unknown to the rubric are
/// omitted silently. The rubric is never re-sorted: the first rule in declared order wins.
pub fn evaluate(rubric: &RubricDefinition, values: &EvaluationValues) -> Vec<String> {
    evaluate_detailed(rubric, values)
        .iter()
        .map(Recommendation::formatted)
        .collect()
}

/// Same selection as [`evaluate`], returning the matched rule details.
pub fn evaluate_detailed(rubric: &RubricDefinition, values: &EvaluationValues) -> Vec<Recommendation> {
    rubric
        .categories
        .iter()
        .filter_map(|category| {
            let score = *values.get(&category.key)?;
            let rule = category.matching_rule(score)?;
            Some(Recommendation {
                category_key: category.key.clone(),
                label: category.label.clone(),
                score,
                max_score: rule.max_score,
                text: rule.text.clone(),
            })
        })
        .collect()
}
