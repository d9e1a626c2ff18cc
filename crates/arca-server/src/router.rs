use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Arca endpoints.
pub fn build_router(state: AppState, max_artifact_size: u64) -> Router {
    Router::new()
        .route("/v1/artifacts", post(handler::upload_handler))
        .route("/v1/artifacts/check", post(handler::check_handler))
        .route(
            "/v1/artifacts/:id/classify",
            post(handler::classify_handler),
        )
        .route("/v1/predict", post(handler::predict_handler))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(DefaultBodyLimit::max(max_artifact_size as usize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
