use serde::{Deserialize, Serialize};

use super::EvaluationValues;

/// Accepted score domain, enforced at the request boundary before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreValidationError {
    #[error("score for '{key}' must be between {min} and {max} (got {score})")]
    OutOfRange {
        key: String,
        score: i32,
        min: i32,
        max: i32,
    },
}

impl ScoreRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, score: i32) -> bool {
        (self.min..=self.max).contains(&score)
    }

    /// Reject the first score, in key order, that falls outside the range.
    pub fn validate(&self, values: &EvaluationValues) -> Result<(), ScoreValidationError> {
        match values.iter().find(|(_, score)| !self.contains(**score)) {
            Some((key, score)) => Err(ScoreValidationError::OutOfRange {
                key: key.clone(),
                score: *score,
                min: self.min,
                max: self.max,
            }),
            None => Ok(()),
        }
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scores_inside_range() {
        let values = EvaluationValues::from([
            ("batting".to_string(), 1),
            ("running".to_string(), 10),
        ]);
        assert!(ScoreRange::default().validate(&values).is_ok());
    }

    #[test]
    fn reports_offending_key() {
        let values = EvaluationValues::from([
            ("batting".to_string(), 4),
            ("iq".to_string(), 0),
        ]);

        let err = ScoreRange::default()
            .validate(&values)
            .expect_err("zero is out of range");

        assert_eq!(
            err,
            ScoreValidationError::OutOfRange {
                key: "iq".to_string(),
                score: 0,
                min: 1,
                max: 10,
            }
        );
    }
}
