use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rubric::{EvaluationValues, Recommendation};

/// Identifier for a child on the roster.
pub type ChildId = i64;

pub const DEFAULT_LOG_LIMIT: usize = 50;
pub const MAX_LOG_LIMIT: usize = 200;
pub const MAX_PLAYER_LISTING: usize = 200;

/// Request-shape problems rejected before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("child_id must be 1 or greater (got {0})")]
    InvalidChildId(ChildId),
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("practice_type must be one of: weekday, weekend, individual, team (got '{0}')")]
    UnknownPracticeType(String),
    #[error("limit must be between 1 and {max} (got {value})")]
    InvalidLimit { value: usize, max: usize },
}

/// Practice kind as stored. Front ends send `weekday`/`weekend`, which map onto
/// `individual`/`team`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeType {
    Individual,
    Team,
}

impl PracticeType {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "weekday" | "individual" => Ok(Self::Individual),
            "weekend" | "team" => Ok(Self::Team),
            _ => Err(ValidationError::UnknownPracticeType(raw.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PracticeType::Individual => "individual",
            PracticeType::Team => "team",
        }
    }
}

impl fmt::Display for PracticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PracticeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PracticeType::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Journal entry as submitted by a player or parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeLogSubmission {
    pub child_id: ChildId,
    pub practice_type: PracticeType,
    pub practice_date: NaiveDate,
    pub mood: i32,
    pub fatigue: i32,
    pub today_practice: String,
    pub coach_said: String,
    pub next_goal: String,
    #[serde(default)]
    pub free_note: Option<String>,
}

impl PracticeLogSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_child_id(self.child_id)?;
        check_range("mood", self.mood, 1, 5)?;
        check_range("fatigue", self.fatigue, 1, 5)
    }
}

/// Stored practice log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeLog {
    pub id: i64,
    pub child_id: ChildId,
    pub practice_type: PracticeType,
    pub practice_date: NaiveDate,
    pub mood: i32,
    pub fatigue: i32,
    pub today_practice: String,
    pub coach_said: String,
    pub next_goal: String,
    pub free_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PracticeLog {
    pub fn from_submission(id: i64, submission: PracticeLogSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            child_id: submission.child_id,
            practice_type: submission.practice_type,
            practice_date: submission.practice_date,
            mood: submission.mood,
            fatigue: submission.fatigue,
            today_practice: submission.today_practice,
            coach_said: submission.coach_said,
            next_goal: submission.next_goal,
            free_note: submission.free_note,
            created_at,
        }
    }
}

/// Filter for practice log listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PracticeLogQuery {
    #[serde(default)]
    pub child_id: Option<ChildId>,
    #[serde(default = "default_log_limit")]
    pub limit: usize,
}

fn default_log_limit() -> usize {
    DEFAULT_LOG_LIMIT
}

impl Default for PracticeLogQuery {
    fn default() -> Self {
        Self {
            child_id: None,
            limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl PracticeLogQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.limit == 0 || self.limit > MAX_LOG_LIMIT {
            return Err(ValidationError::InvalidLimit {
                value: self.limit,
                max: MAX_LOG_LIMIT,
            });
        }
        Ok(())
    }
}

/// Roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: ChildId,
    pub name: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Coach skill evaluation as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSubmission {
    pub child_id: ChildId,
    #[serde(default)]
    pub evaluated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub scores: EvaluationValues,
}

/// Stored evaluation along with the tips produced from the rubric active at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: i64,
    pub child_id: ChildId,
    pub evaluated_at: DateTime<Utc>,
    pub memo: Option<String>,
    pub scores: EvaluationValues,
    pub recommendations: Vec<String>,
    pub details: Vec<Recommendation>,
}

/// Aggregate view over practice logs for the coach dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachSummary {
    pub total_reports: usize,
    pub latest_date: Option<NaiveDate>,
}

pub(crate) fn validate_child_id(child_id: ChildId) -> Result<(), ValidationError> {
    if child_id < 1 {
        return Err(ValidationError::InvalidChildId(child_id));
    }
    Ok(())
}

fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
