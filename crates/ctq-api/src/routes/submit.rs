use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use ctq_core::models::quiz::OptionId;
use ctq_core::models::submission::{SubmissionRequest, SubmissionResponse};
use ctq_instruments::band;

use crate::error::ApiError;
use crate::state::AppState;

/// Total-score submission.
///
/// Sums the raw values of the selected options and bands the total. This does
/// not reverse-code or separate scales; `/api/quiz/score` is the per-scale
/// path and the two results are not expected to agree.
///
/// A missing, zero or blank `quizId`, an empty `answers` list, and any body
/// that does not parse as a submission all get the same 400 message.
pub async fn submit_quiz(
    State(state): State<AppState>,
    body: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable submission body");
            return Err(missing_fields());
        }
    };

    let has_quiz = req.quiz_id.as_ref().is_some_and(|id| !id.is_blank());
    if !has_quiz || req.answers.is_empty() {
        return Err(missing_fields());
    }

    let ids: Vec<OptionId> = req.answers.iter().map(|a| a.selected_option_id).collect();
    let values = state.store.option_values(&ids);
    if values.len() != ids.len() {
        tracing::warn!(
            selected = ids.len(),
            found = values.len(),
            "not all selected options were found"
        );
    }

    let response = band::score_submission(ids.iter().map(|id| (*id, values.get(id).copied())));
    Ok(Json(response))
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("Missing quizId or answers in request body".to_string())
}
