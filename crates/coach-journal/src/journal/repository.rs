use super::domain::{
    ChildId, CoachSummary, EvaluationRecord, PracticeLog, PracticeLogQuery, Player,
};

/// Roster storage.
pub trait PlayerRepository: Send + Sync {
    /// Players ordered by ascending id.
    fn list(&self, limit: usize) -> Result<Vec<Player>, RepositoryError>;
    fn fetch(&self, id: ChildId) -> Result<Option<Player>, RepositoryError>;
}

/// Practice journal storage.
pub trait PracticeLogRepository: Send + Sync {
    fn insert(&self, log: PracticeLog) -> Result<PracticeLog, RepositoryError>;
    /// Newest practice date first, ties broken by descending id.
    fn list(&self, query: &PracticeLogQuery) -> Result<Vec<PracticeLog>, RepositoryError>;
    fn summary(&self) -> Result<CoachSummary, RepositoryError>;
}

/// Coach evaluation storage.
pub trait EvaluationRepository: Send + Sync {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError>;
    /// Most recent evaluation first.
    fn list_for_child(&self, child_id: ChildId) -> Result<Vec<EvaluationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
