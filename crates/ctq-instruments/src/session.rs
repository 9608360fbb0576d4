//! Quiz runner: collects one answer per question and scores the attempt once
//! every question has been answered.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use ctq_core::error::CoreError;
use ctq_core::models::answer::{AnswerSet, QuestionId};
use ctq_core::models::quiz::{OptionId, Question, Quiz};

use crate::scoring::CtqResult;
use crate::Instrument;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("quiz could not be loaded: {0}")]
    Load(#[from] CoreError),

    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(QuestionId),

    #[error("option {option} is not an answer to question {question}")]
    UnknownOption {
        question: QuestionId,
        option: OptionId,
    },

    #[error("Please answer all {total} questions. You have {remaining} remaining.")]
    Incomplete { total: usize, remaining: usize },
}

/// One attempt at a quiz.
pub struct QuizSession {
    quiz: Quiz,
    instrument: Arc<dyn Instrument>,
    answers: AnswerSet,
    selected: Vec<Option<OptionId>>,
    index: usize,
    attempt_id: Uuid,
    started_at: jiff::Timestamp,
}

impl QuizSession {
    /// Validate the quiz content and start the first attempt on question one.
    pub fn start(quiz: Quiz, instrument: Arc<dyn Instrument>) -> Result<Self, SessionError> {
        let quiz = quiz.into_validated()?;

        let config = instrument.config();
        for id in quiz.question_ids() {
            if config.owner(id).is_none() {
                tracing::warn!(
                    question = id.0,
                    instrument = instrument.id(),
                    "question is not scored by any scale"
                );
            }
        }

        let selected = vec![None; quiz.questions.len()];
        let session = Self {
            quiz,
            instrument,
            answers: AnswerSet::new(),
            selected,
            index: 0,
            attempt_id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
        };
        tracing::info!(
            attempt = %session.attempt_id,
            quiz = %session.quiz.slug,
            questions = session.quiz.questions.len(),
            "quiz attempt started"
        );
        Ok(session)
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    pub fn current(&self) -> &Question {
        &self.quiz.questions[self.index]
    }

    /// One-based position of the current question and the question count.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.quiz.questions.len())
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.quiz.questions.len()
    }

    /// The option chosen for a question, if any.
    pub fn selected(&self, question: QuestionId) -> Option<OptionId> {
        let index = self.quiz.questions.iter().position(|q| q.id == question)?;
        self.selected[index]
    }

    pub fn is_current_answered(&self) -> bool {
        self.selected[self.index].is_some()
    }

    /// Record an answer, replacing any earlier one for the same question.
    /// Answering the current question moves on to the next, except on the
    /// last question.
    pub fn select(&mut self, question: QuestionId, option: OptionId) -> Result<(), SessionError> {
        let index = self
            .quiz
            .questions
            .iter()
            .position(|q| q.id == question)
            .ok_or(SessionError::UnknownQuestion(question))?;
        let value = self.quiz.questions[index]
            .option(option)
            .map(|o| o.value)
            .ok_or(SessionError::UnknownOption { question, option })?;

        self.answers.record(question, value);
        self.selected[index] = Some(option);

        if index == self.index {
            self.next();
        }
        Ok(())
    }

    /// Advance when the current question is answered and is not the last.
    pub fn next(&mut self) -> bool {
        if self.is_current_answered() && !self.is_last() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> usize {
        self.selected.iter().filter(|s| s.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Score the attempt. Refused until every question has an answer.
    pub fn finalize(&self) -> Result<CtqResult, SessionError> {
        let remaining = self.remaining();
        if remaining > 0 {
            return Err(SessionError::Incomplete {
                total: self.quiz.questions.len(),
                remaining,
            });
        }

        let result = self.instrument.score(&self.answers);
        tracing::info!(
            attempt = %self.attempt_id,
            total = result.total,
            highest = %result.highest_severity(),
            "quiz attempt scored"
        );
        Ok(result)
    }

    /// Discard every answer and start a fresh attempt.
    pub fn retake(&mut self) {
        self.answers.clear();
        self.selected.fill(None);
        self.index = 0;
        self.attempt_id = Uuid::new_v4();
        self.started_at = jiff::Timestamp::now();
        tracing::info!(attempt = %self.attempt_id, "quiz attempt restarted");
    }
}
