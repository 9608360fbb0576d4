//! Question/answer store.
//!
//! Quizzes, questions and options are read-only content. `MemoryStore` keeps
//! them in process, loaded from a JSON document shaped like
//! `{"quizzes": [Quiz, ...]}`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use ctq_core::models::quiz::{OptionId, Quiz};
use ctq_core::models::submission::QuizRef;

const SEED: &str = include_str!("../data/quizzes.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed store document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub trait OptionStore: Send + Sync {
    fn quiz(&self, quiz: &QuizRef) -> Option<Quiz>;

    /// Raw values of the given options. Unknown ids are absent from the map.
    fn option_values(&self, ids: &[OptionId]) -> HashMap<OptionId, i64>;
}

#[derive(Deserialize)]
struct StoreDocument {
    quizzes: Vec<Quiz>,
}

pub struct MemoryStore {
    quizzes: Vec<Quiz>,
    values: HashMap<OptionId, i64>,
}

impl MemoryStore {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        let values = quizzes
            .iter()
            .flat_map(|quiz| &quiz.questions)
            .flat_map(|question| &question.options)
            .map(|option| (option.id, option.value))
            .collect();
        Self { quizzes, values }
    }

    /// The bundled CTQ-SF quiz.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_json(SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let document: StoreDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.quizzes))
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            quizzes = store.quizzes.len(),
            "loaded quiz store"
        );
        Ok(store)
    }
}

impl OptionStore for MemoryStore {
    fn quiz(&self, quiz: &QuizRef) -> Option<Quiz> {
        self.quizzes
            .iter()
            .find(|q| match quiz {
                QuizRef::Id(id) => q.id == *id,
                QuizRef::Slug(slug) => q.slug == *slug,
            })
            .cloned()
    }

    fn option_values(&self, ids: &[OptionId]) -> HashMap<OptionId, i64> {
        ids.iter()
            .filter_map(|id| self.values.get(id).map(|value| (*id, *value)))
            .collect()
    }
}
