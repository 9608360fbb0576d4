use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use ctq_instruments::config::ScoringConfig;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    config: ScoringConfig,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    Json(vec![InstrumentSummary {
        id: state.instrument.id().to_string(),
        name: state.instrument.name().to_string(),
    }])
}

/// The scoring table the service is currently using.
pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = &state.instrument;
    if instrument.id() != id {
        return Err(ApiError::NotFound(format!("instrument not found: {id}")));
    }

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        config: instrument.config().clone(),
    }))
}
