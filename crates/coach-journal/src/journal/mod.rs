//! Practice journal, roster, and coach evaluation workflow.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ChildId, CoachSummary, EvaluationRecord, EvaluationSubmission, PracticeLog, PracticeLogQuery,
    PracticeLogSubmission, PracticeType, Player, ValidationError,
};
pub use memory::{
    InMemoryEvaluationRepository, InMemoryPlayerRepository, InMemoryPracticeLogRepository,
};
pub use repository::{
    EvaluationRepository, PlayerRepository, PracticeLogRepository, RepositoryError,
};
pub use router::journal_router;
pub use service::{JournalService, JournalServiceError};
