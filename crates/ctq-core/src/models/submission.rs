use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::QuestionId;
use super::quiz::OptionId;

/// A quiz reference as sent by clients: numeric id or slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum QuizRef {
    Id(#[ts(type = "number")] u64),
    Slug(String),
}

impl QuizRef {
    /// True for references no quiz can have: id 0 or an empty slug.
    pub fn is_blank(&self) -> bool {
        match self {
            QuizRef::Id(id) => *id == 0,
            QuizRef::Slug(slug) => slug.trim().is_empty(),
        }
    }
}

/// Body of a quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionRequest {
    #[serde(rename = "quizId", default)]
    pub quiz_id: Option<QuizRef>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    pub selected_option_id: OptionId,
}

/// Coarse category produced by the total-score submission path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ResultCategory {
    Low,
    Medium,
    High,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionResponse {
    #[ts(type = "number")]
    pub score: i64,
    pub result_category: ResultCategory,
}
