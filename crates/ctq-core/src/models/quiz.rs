use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::QuestionId;
use crate::error::CoreError;

/// Identifier of a selectable answer option.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct OptionId(#[ts(type = "number")] pub u64);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz as served by the question/answer store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quiz {
    #[ts(type = "number")]
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(default)]
    pub order: u32,
    #[serde(rename = "answer_options")]
    pub options: Vec<AnswerOption>,
}

/// One selectable option. `value` is the raw response it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    #[ts(type = "number")]
    pub value: i64,
}

impl Quiz {
    /// Order questions by `order` and options by ascending value, then reject
    /// structurally incomplete content. A quiz that fails here must not be
    /// shown at all.
    pub fn into_validated(mut self) -> Result<Self, CoreError> {
        self.questions.sort_by_key(|q| q.order);
        for question in &mut self.questions {
            question.options.sort_by_key(|o| o.value);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.questions.is_empty() {
            return Err(CoreError::EmptyQuiz {
                slug: self.slug.clone(),
            });
        }
        if let Some(question) = self.questions.iter().find(|q| q.options.is_empty()) {
            return Err(CoreError::QuestionWithoutOptions {
                question_id: question.id,
            });
        }

        let mut questions = HashSet::new();
        let mut options = HashSet::new();
        for question in &self.questions {
            if !questions.insert(question.id) {
                return Err(CoreError::DuplicateQuestion {
                    question_id: question.id,
                });
            }
            // Option ids resolve to values quiz-wide, not per question.
            if let Some(option) = question.options.iter().find(|o| !options.insert(o.id)) {
                return Err(CoreError::DuplicateOption { option_id: option.id });
            }
        }
        Ok(())
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|q| q.id)
    }
}

impl Question {
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }
}
