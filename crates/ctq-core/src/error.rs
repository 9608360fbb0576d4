use thiserror::Error;

use crate::models::answer::QuestionId;
use crate::models::quiz::OptionId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("response {0} is outside the range [1, 5]")]
    InvalidResponse(i64),

    #[error("quiz '{slug}' has no questions")]
    EmptyQuiz { slug: String },

    #[error("question {question_id} has no answer options")]
    QuestionWithoutOptions { question_id: QuestionId },

    #[error("question {question_id} appears more than once")]
    DuplicateQuestion { question_id: QuestionId },

    #[error("answer option {option_id} appears more than once")]
    DuplicateOption { option_id: OptionId },
}
