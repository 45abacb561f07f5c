//! System endpoints: health check and the JSON fallback for unknown routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{HealthResponse, SystemInfo};
use crate::app_state::AppState;
use crate::error::ApiError;

/// `GET /v1/healthcheck`: Service health status.
#[utoipa::path(
    get,
    path = "/v1/healthcheck",
    tag = "System",
    summary = "Health check",
    description = "Returns service availability, environment, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is available", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "available".to_string(),
            system_info: SystemInfo {
                environment: state.environment,
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: Utc::now().to_rfc3339(),
            },
        }),
    )
}

/// Fallback for routes that match nothing.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// System routes mounted under `/v1`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(health_handler))
}
