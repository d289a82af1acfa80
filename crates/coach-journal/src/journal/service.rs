use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{
    validate_child_id, ChildId, CoachSummary, EvaluationRecord, EvaluationSubmission,
    PracticeLog, PracticeLogQuery, PracticeLogSubmission, Player, ValidationError,
    MAX_PLAYER_LISTING,
};
use super::repository::{
    EvaluationRepository, PlayerRepository, PracticeLogRepository, RepositoryError,
};
use crate::rubric::{
    evaluate_detailed, EvaluationValues, Recommendation, RubricDefinition, RubricStore,
    ScoreRange, ScoreValidationError,
};

/// Service composing the journal repositories with the shared rubric.
pub struct JournalService<P, L, E> {
    players: Arc<P>,
    logs: Arc<L>,
    evaluations: Arc<E>,
    rubric: RubricStore,
    score_range: ScoreRange,
    log_sequence: AtomicI64,
    evaluation_sequence: AtomicI64,
}

impl<P, L, E> JournalService<P, L, E>
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    pub fn new(
        players: Arc<P>,
        logs: Arc<L>,
        evaluations: Arc<E>,
        rubric: RubricStore,
        score_range: ScoreRange,
    ) -> Self {
        Self {
            players,
            logs,
            evaluations,
            rubric,
            score_range,
            log_sequence: AtomicI64::new(1),
            evaluation_sequence: AtomicI64::new(1),
        }
    }

    pub fn rubric(&self) -> Arc<RubricDefinition> {
        self.rubric.current()
    }

    pub fn rubric_store(&self) -> &RubricStore {
        &self.rubric
    }

    /// Validate scores against the configured range, then run them through the current rubric.
    pub fn recommend(
        &self,
        scores: &EvaluationValues,
    ) -> Result<Vec<Recommendation>, JournalServiceError> {
        self.score_range.validate(scores)?;
        let rubric = self.rubric.current();
        let recommendations = evaluate_detailed(&rubric, scores);
        debug!(
            scored = scores.len(),
            matched = recommendations.len(),
            "recommendations evaluated"
        );
        Ok(recommendations)
    }

    pub fn record_practice(
        &self,
        submission: PracticeLogSubmission,
    ) -> Result<PracticeLog, JournalServiceError> {
        submission.validate()?;
        let id = self.log_sequence.fetch_add(1, Ordering::Relaxed);
        let log = PracticeLog::from_submission(id, submission, Utc::now());
        let stored = self.logs.insert(log)?;
        info!(
            log_id = stored.id,
            child_id = stored.child_id,
            practice_type = %stored.practice_type,
            "practice log recorded"
        );
        Ok(stored)
    }

    pub fn practice_logs(
        &self,
        query: PracticeLogQuery,
    ) -> Result<Vec<PracticeLog>, JournalServiceError> {
        query.validate()?;
        Ok(self.logs.list(&query)?)
    }

    pub fn players(&self) -> Result<Vec<Player>, JournalServiceError> {
        Ok(self.players.list(MAX_PLAYER_LISTING)?)
    }

    pub fn player(&self, id: ChildId) -> Result<Player, JournalServiceError> {
        self.players
            .fetch(id)?
            .ok_or(JournalServiceError::Repository(RepositoryError::NotFound))
    }

    pub fn record_evaluation(
        &self,
        submission: EvaluationSubmission,
    ) -> Result<EvaluationRecord, JournalServiceError> {
        validate_child_id(submission.child_id)?;
        let details = self.recommend(&submission.scores)?;
        let recommendations = details.iter().map(Recommendation::formatted).collect();

        let record = EvaluationRecord {
            id: self.evaluation_sequence.fetch_add(1, Ordering::Relaxed),
            child_id: submission.child_id,
            evaluated_at: submission.evaluated_at.unwrap_or_else(Utc::now),
            memo: submission.memo,
            scores: submission.scores,
            recommendations,
            details,
        };

        let stored = self.evaluations.insert(record)?;
        info!(
            evaluation_id = stored.id,
            child_id = stored.child_id,
            recommendations = stored.recommendations.len(),
            "evaluation recorded"
        );
        Ok(stored)
    }

    pub fn evaluations_for(
        &self,
        child_id: ChildId,
    ) -> Result<Vec<EvaluationRecord>, JournalServiceError> {
        validate_child_id(child_id)?;
        Ok(self.evaluations.list_for_child(child_id)?)
    }

    pub fn coach_summary(&self) -> Result<CoachSummary, JournalServiceError> {
        Ok(self.logs.summary()?)
    }
}

/// Errors surfaced by the service façade.
#[derive(Debug, thiserror::Error)]
pub enum JournalServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Scores(#[from] ScoreValidationError),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
