use coach_journal::error::AppError;
use coach_journal::journal::{
    InMemoryEvaluationRepository, InMemoryPlayerRepository, InMemoryPracticeLogRepository,
    JournalService, Player,
};
use coach_journal::rubric::{RubricSource, RubricStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type InMemoryJournalService = JournalService<
    InMemoryPlayerRepository,
    InMemoryPracticeLogRepository,
    InMemoryEvaluationRepository,
>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) rubric: RubricStore,
    pub(crate) rubric_source: RubricSource,
}

/// Read a JSON array of players for the in-memory roster.
pub(crate) fn load_roster(path: &Path) -> Result<Vec<Player>, AppError> {
    let raw = fs::read_to_string(path)?;
    parse_roster(&raw)
}

pub(crate) fn parse_roster(raw: &str) -> Result<Vec<Player>, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
