use axum::Json;
use axum::extract::{Path, State};

use ctq_core::models::quiz::Quiz;
use ctq_core::models::submission::QuizRef;

use crate::error::ApiError;
use crate::state::AppState;

/// A quiz with questions in display order and options ordered by value.
/// Structurally incomplete content is refused as a whole.
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Quiz>, ApiError> {
    let quiz = state
        .store
        .quiz(&QuizRef::Slug(slug.clone()))
        .ok_or_else(|| ApiError::NotFound(format!("Quiz not found: {slug}")))?;
    Ok(Json(quiz.into_validated()?))
}
