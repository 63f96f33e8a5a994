//! Readiness endpoint checking downstream dependencies

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::ApiResponse;

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> Response {
    match database::postgres::check_health(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message("Ready", ())),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error(503, "Database unavailable")),
            )
                .into_response()
        }
    }
}

pub fn ready_router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
