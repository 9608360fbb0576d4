//! Raw responses to scale scores.
//!
//! A missing or out-of-range response never aborts scoring: it contributes
//! zero to the scale that owns it and is reported as a warning. Rejecting
//! incomplete submissions is the quiz runner's job.

use ctq_core::models::answer::{AnswerSet, Likert, QuestionId};

use crate::config::ScoringConfig;
use crate::scoring::{ClinicalScale, CtqResult, PerScale, ScaleOutcome};

/// Score a response contributes after reverse-coding.
pub fn effective(config: &ScoringConfig, question: QuestionId, response: Likert) -> u32 {
    if config.is_reverse_coded(question) {
        response.reversed().value()
    } else {
        response.value()
    }
}

pub fn scale_score(answers: &AnswerSet, config: &ScoringConfig, scale: ClinicalScale) -> u32 {
    config
        .membership
        .get(scale)
        .iter()
        .map(|&question| match answers.response(question) {
            Some(response) => effective(config, question, response),
            None => {
                warn_unscored(answers, question, scale.code());
                0
            }
        })
        .sum()
}

/// Number of Minimization/Denial items answered "Very Often True".
pub fn minimization_score(answers: &AnswerSet, config: &ScoringConfig) -> u32 {
    config
        .minimization
        .iter()
        .map(|&question| match answers.response(question) {
            Some(response) => u32::from(response.is_max()),
            None => {
                warn_unscored(answers, question, "MD");
                0
            }
        })
        .sum()
}

/// Score every scale and classify the clinical ones.
pub fn compute_result(answers: &AnswerSet, config: &ScoringConfig) -> CtqResult {
    let scales = PerScale::from_fn(|scale| {
        let score = scale_score(answers, config, scale);
        ScaleOutcome {
            score,
            severity: config.severity.get(scale).classify(score),
            positive: score >= *config.positive.get(scale),
        }
    });
    let total: u32 = scales.iter().map(|(_, outcome)| outcome.score).sum();
    let minimization = minimization_score(answers, config);

    tracing::debug!(total, minimization, "computed CTQ-SF result");

    CtqResult {
        scales,
        minimization,
        total,
    }
}

fn warn_unscored(answers: &AnswerSet, question: QuestionId, scale: &str) {
    match answers.raw(question) {
        Some(raw) => tracing::warn!(
            question = question.0,
            raw,
            scale,
            "response out of range, scored as 0"
        ),
        None => tracing::warn!(question = question.0, scale, "missing response, scored as 0"),
    }
}
