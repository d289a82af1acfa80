use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{
    ChildId, CoachSummary, EvaluationRecord, PracticeLog, PracticeLogQuery, Player,
};
use super::repository::{
    EvaluationRepository, PlayerRepository, PracticeLogRepository, RepositoryError,
};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".to_string()))
}

#[derive(Default, Clone)]
pub struct InMemoryPlayerRepository {
    players: Arc<Mutex<BTreeMap<ChildId, Player>>>,
}

impl InMemoryPlayerRepository {
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        let roster = players
            .into_iter()
            .map(|player| (player.id, player))
            .collect();
        Self {
            players: Arc::new(Mutex::new(roster)),
        }
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn list(&self, limit: usize) -> Result<Vec<Player>, RepositoryError> {
        let guard = lock(&self.players)?;
        Ok(guard.values().take(limit).cloned().collect())
    }

    fn fetch(&self, id: ChildId) -> Result<Option<Player>, RepositoryError> {
        let guard = lock(&self.players)?;
        Ok(guard.get(&id).cloned())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryPracticeLogRepository {
    logs: Arc<Mutex<Vec<PracticeLog>>>,
}

impl PracticeLogRepository for InMemoryPracticeLogRepository {
    fn insert(&self, log: PracticeLog) -> Result<PracticeLog, RepositoryError> {
        let mut guard = lock(&self.logs)?;
        if guard.iter().any(|existing| existing.id == log.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(log.clone());
        Ok(log)
    }

    fn list(&self, query: &PracticeLogQuery) -> Result<Vec<PracticeLog>, RepositoryError> {
        let guard = lock(&self.logs)?;
        let mut logs: Vec<PracticeLog> = guard
            .iter()
            .filter(|log| query.child_id.map_or(true, |child| log.child_id == child))
            .cloned()
            .collect();
        logs.sort_by(|a, b| {
            b.practice_date
                .cmp(&a.practice_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        logs.truncate(query.limit);
        Ok(logs)
    }

    fn summary(&self) -> Result<CoachSummary, RepositoryError> {
        let guard = lock(&self.logs)?;
        Ok(CoachSummary {
            total_reports: guard.len(),
            latest_date: guard.iter().map(|log| log.practice_date).max(),
        })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryEvaluationRepository {
    records: Arc<Mutex<Vec<EvaluationRecord>>>,
}

impl EvaluationRepository for InMemoryEvaluationRepository {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_for_child(&self, child_id: ChildId) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        let mut records: Vec<EvaluationRecord> = guard
            .iter()
            .filter(|record| record.child_id == child_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            b.evaluated_at
                .cmp(&a.evaluated_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }
}
