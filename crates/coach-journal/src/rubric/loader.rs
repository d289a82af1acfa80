use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use super::{Category, RubricDefinition};

/// Failure to turn a rubric source into a definition. Evaluation cannot proceed without one.
#[derive(Debug, thiserror::Error)]
pub enum RubricLoadError {
    #[error("unable to read rubric file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("rubric is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Accepts either `{"categories": [...]}` or a bare array of categories.
#[derive(Deserialize)]
#[serde(untagged)]
enum RubricDocument {
    Bare(Vec<Category>),
    Wrapped(RubricDefinition),
}

impl RubricDefinition {
    pub fn from_json_str(raw: &str) -> Result<Self, RubricLoadError> {
        let definition = match serde_json::from_str::<RubricDocument>(raw) {
            Ok(RubricDocument::Bare(categories)) => RubricDefinition::new(categories),
            Ok(RubricDocument::Wrapped(definition)) => definition,
            // Untagged errors are opaque; re-parse as the shape the document opens with.
            Err(_) if raw.trim_start().starts_with('[') => {
                RubricDefinition::new(serde_json::from_str::<Vec<Category>>(raw)?)
            }
            Err(_) => serde_json::from_str::<RubricDefinition>(raw)?,
        };
        warn_on_suspicious_layout(&definition);
        Ok(definition)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RubricLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RubricLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

/// Where the service obtains its rubric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RubricSource {
    Standard,
    File(PathBuf),
}

impl RubricSource {
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Standard,
        }
    }

    /// A configured file that does not exist yields an empty rubric; unreadable or malformed
    /// files are errors.
    pub fn load(&self) -> Result<RubricDefinition, RubricLoadError> {
        match self {
            RubricSource::Standard => Ok(RubricDefinition::standard()),
            RubricSource::File(path) if !path.exists() => {
                warn!(path = %path.display(), "rubric file not found; serving an empty rubric");
                Ok(RubricDefinition::default())
            }
            RubricSource::File(path) => {
                let definition = RubricDefinition::from_path(path)?;
                info!(
                    path = %path.display(),
                    categories = definition.categories.len(),
                    "rubric loaded"
                );
                Ok(definition)
            }
        }
    }
}

fn warn_on_suspicious_layout(definition: &RubricDefinition) {
    let mut seen = HashSet::new();
    for category in &definition.categories {
        if !seen.insert(category.key.as_str()) {
            warn!(category = %category.key, "duplicate rubric category key");
        }

        let ascending = category
            .rules
            .windows(2)
            .all(|pair| pair[0].max_score <= pair[1].max_score);
        if !ascending {
            warn!(
                category = %category.key,
                "rubric rules are not in ascending max_score order; later rules may be unreachable"
            );
        }
    }
}
