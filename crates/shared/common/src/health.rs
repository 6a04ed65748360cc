//! Health check payload.

use serde::{Deserialize, Serialize};

use domain::STATUS_HEALTHY;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    #[cfg_attr(feature = "openapi", schema(example = "healthy"))]
    pub status: String,
    #[cfg_attr(feature = "openapi", schema(example = "user-service"))]
    pub service: String,
}

impl HealthResponse {
    /// A live service reporting its name.
    pub fn healthy(service: &str) -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            service: service.to_string(),
        }
    }
}
