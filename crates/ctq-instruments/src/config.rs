//! The CTQ-SF scoring table.
//!
//! Scale membership, reverse-coded items and both cutoff tables live in one
//! versioned JSON document. Every other module reads them from here.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use ctq_core::models::answer::QuestionId;

use crate::scoring::{ClinicalScale, PerScale, Scale, SeverityCutoffs};

/// Table format understood by this build. Bump when the shape changes.
pub const CONFIG_VERSION: u32 = 1;

const STANDARD_TABLE: &str = include_str!("../data/ctq_sf.json");

static STANDARD: LazyLock<ScoringConfig> = LazyLock::new(|| {
    ScoringConfig::from_json(STANDARD_TABLE)
        .unwrap_or_else(|e| panic!("shipped CTQ-SF scoring table is invalid: {e}"))
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct ScoringConfig {
    pub version: u32,
    /// Number of items in the instrument; valid ids are `1..=item_count`.
    pub item_count: u32,
    pub membership: PerScale<Vec<QuestionId>>,
    pub minimization: Vec<QuestionId>,
    pub reverse_coded: BTreeSet<QuestionId>,
    pub severity: PerScale<SeverityCutoffs>,
    pub positive: PerScale<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed scoring table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read scoring table at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "unsupported scoring table version {found} (expected {expected})",
        expected = CONFIG_VERSION
    )]
    UnsupportedVersion { found: u32 },

    #[error("question {question} in {scale} is outside 1..={item_count}")]
    OutOfRange {
        question: QuestionId,
        scale: Scale,
        item_count: u32,
    },

    #[error("question {question} is claimed by both {first} and {second}")]
    Overlap {
        question: QuestionId,
        first: Scale,
        second: Scale,
    },

    #[error("question {question} is listed twice in {scale}")]
    DuplicateItem { question: QuestionId, scale: Scale },

    #[error("{0} has no items")]
    EmptyScale(Scale),

    #[error("reverse-coded question {0} does not belong to a clinical scale")]
    OrphanReverseItem(QuestionId),

    #[error(
        "severity cutoffs for {scale} must ascend strictly (got {}/{}/{})",
        .cutoffs.low, .cutoffs.moderate, .cutoffs.severe
    )]
    CutoffOrder {
        scale: ClinicalScale,
        cutoffs: SeverityCutoffs,
    },

    #[error("positive cutoff for {0} must be greater than zero")]
    ZeroPositiveCutoff(ClinicalScale),
}

impl ScoringConfig {
    /// The shipped CTQ-SF table, parsed and validated once per process.
    ///
    /// # Panics
    ///
    /// Panics on first use if the embedded table fails validation. The table
    /// is compiled in, so this indicates a build defect.
    pub fn standard() -> &'static ScoringConfig {
        &STANDARD
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            version = config.version,
            "loaded scoring table"
        );
        Ok(config)
    }

    /// Check the integrity rules every table must satisfy before it can score.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
            });
        }

        let mut owners: HashMap<QuestionId, Scale> = HashMap::new();
        for (scale, items) in self.item_lists() {
            if items.is_empty() {
                return Err(ConfigError::EmptyScale(scale));
            }
            for &question in items {
                if question.0 == 0 || question.0 > self.item_count {
                    return Err(ConfigError::OutOfRange {
                        question,
                        scale,
                        item_count: self.item_count,
                    });
                }
                if let Some(&first) = owners.get(&question) {
                    return Err(if first == scale {
                        ConfigError::DuplicateItem { question, scale }
                    } else {
                        ConfigError::Overlap {
                            question,
                            first,
                            second: scale,
                        }
                    });
                }
                owners.insert(question, scale);
            }
        }

        if let Some(&question) = self
            .reverse_coded
            .iter()
            .find(|q| !matches!(owners.get(*q), Some(Scale::Clinical(_))))
        {
            return Err(ConfigError::OrphanReverseItem(question));
        }

        for (scale, cutoffs) in self.severity.iter() {
            if !cutoffs.is_ascending() {
                return Err(ConfigError::CutoffOrder {
                    scale,
                    cutoffs: *cutoffs,
                });
            }
        }

        if let Some((scale, _)) = self.positive.iter().find(|(_, cutoff)| **cutoff == 0) {
            return Err(ConfigError::ZeroPositiveCutoff(scale));
        }

        Ok(())
    }

    /// The scale that owns a question, if any.
    pub fn owner(&self, question: QuestionId) -> Option<Scale> {
        self.item_lists()
            .find(|(_, items)| items.contains(&question))
            .map(|(scale, _)| scale)
    }

    pub fn is_reverse_coded(&self, question: QuestionId) -> bool {
        self.reverse_coded.contains(&question)
    }

    /// Every scored item, ascending.
    pub fn question_ids(&self) -> Vec<QuestionId> {
        let mut ids: Vec<QuestionId> = self
            .item_lists()
            .flat_map(|(_, items)| items)
            .copied()
            .collect();
        ids.sort();
        ids
    }

    fn item_lists(&self) -> impl Iterator<Item = (Scale, &[QuestionId])> + '_ {
        self.membership
            .iter()
            .map(|(scale, items)| (Scale::Clinical(scale), items.as_slice()))
            .chain(std::iter::once((
                Scale::MinimizationDenial,
                self.minimization.as_slice(),
            )))
    }
}
