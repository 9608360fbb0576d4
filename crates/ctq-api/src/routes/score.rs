use axum::Json;
use axum::extract::State;

use ctq_core::models::submission::SubmissionRequest;
use ctq_instruments::scoring::CtqResult;
use ctq_instruments::session::QuizSession;

use crate::error::ApiError;
use crate::state::AppState;

/// Per-scale scoring of a complete submission.
///
/// Every question of the quiz must be answered; otherwise the response is a
/// 400 stating how many remain.
pub async fn score_quiz(
    State(state): State<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> Result<Json<CtqResult>, ApiError> {
    let quiz_ref = req
        .quiz_id
        .filter(|id| !id.is_blank())
        .ok_or_else(|| ApiError::BadRequest("Missing quizId in request body".to_string()))?;
    let quiz = state
        .store
        .quiz(&quiz_ref)
        .ok_or_else(|| ApiError::NotFound("Quiz not found.".to_string()))?;

    let mut session = QuizSession::start(quiz, state.instrument.clone())?;
    for answer in &req.answers {
        session.select(answer.question_id, answer.selected_option_id)?;
    }

    Ok(Json(session.finalize()?))
}
