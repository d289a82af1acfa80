use std::sync::{Arc, RwLock};

use tracing::info;

use super::{RubricDefinition, RubricLoadError, RubricSource};

/// Shared handle to the current rubric. Readers get a whole immutable definition; reloads swap
/// the entire definition at once.
#[derive(Debug, Clone)]
pub struct RubricStore {
    current: Arc<RwLock<Arc<RubricDefinition>>>,
}

impl RubricStore {
    pub fn new(definition: RubricDefinition) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(definition))),
        }
    }

    pub fn load(source: &RubricSource) -> Result<Self, RubricLoadError> {
        Ok(Self::new(source.load()?))
    }

    pub fn current(&self) -> Arc<RubricDefinition> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn replace(&self, definition: RubricDefinition) {
        let next = Arc::new(definition);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// Load from `source` and swap it in. On error the previous rubric stays active.
    pub fn reload(&self, source: &RubricSource) -> Result<Arc<RubricDefinition>, RubricLoadError> {
        let definition = source.load()?;
        info!(categories = definition.categories.len(), "rubric replaced");
        self.replace(definition);
        Ok(self.current())
    }
}

impl Default for RubricStore {
    fn default() -> Self {
        Self::new(RubricDefinition::standard())
    }
}
