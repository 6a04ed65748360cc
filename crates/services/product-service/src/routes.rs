//! Route configuration.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use common::AppError;

use crate::handlers::{health_routes, product_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/products", product_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        // Applies to the routes registered above, so it must come after them
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("Resource")
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
