//! Unified error handling for HTTP handlers.
//!
//! Every failure a handler detects ends here and is rendered as a JSON
//! body of the form `{"error": "..."}` with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Method not allowed")]
    MethodNotAllowed,

    // Upstream service errors
    /// The upstream answered with a status other than 200.
    #[error("Upstream rejected {entity} lookup with status {status}")]
    UpstreamRejected { entity: &'static str, status: u16 },

    /// The upstream could not be reached or its reply could not be read.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = "User not found"))]
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // Upstream rejections surface as not found whatever the upstream said
            AppError::NotFound(_) | AppError::UpstreamRejected { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Invalid request".to_string(),
            AppError::NotFound(entity) | AppError::UpstreamRejected { entity, .. } => {
                format!("{} not found", entity)
            }
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::UpstreamUnavailable(_) => "Service communication error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(detail) => tracing::debug!("Rejected request body: {}", detail),
            AppError::UpstreamRejected { entity, status } => {
                tracing::warn!("Upstream returned {} for {} lookup", status, entity)
            }
            AppError::UpstreamUnavailable(cause) => {
                tracing::error!("Error communicating with upstream service: {}", cause)
            }
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::NotFound(_) | AppError::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(entity) => AppError::NotFound(entity),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn upstream_unavailable(cause: impl Into<String>) -> Self {
        AppError::UpstreamUnavailable(cause.into())
    }
}
