//! ctq-api
//!
//! HTTP surface of the CTQ-SF screening quiz: quiz content, the total-score
//! submission endpoint and per-scale scoring.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/quizzes/{slug}", get(routes::quizzes::get_quiz))
        .route("/api/quiz/submit", post(routes::submit::submit_quiz))
        .route("/api/quiz/score", post(routes::score::score_quiz))
        .layer(axum_mw::from_fn(middleware::audit::request_log))
        .layer(cors)
        .with_state(state)
}
