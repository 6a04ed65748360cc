//! Health check handlers.

use axum::{response::Json, routing::get, Router};

use common::HealthResponse;
use domain::PRODUCT_SERVICE_NAME;

use crate::state::AppState;

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Liveness probe. Does not call user-service.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(PRODUCT_SERVICE_NAME))
}
