//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{error::ErrorResponse, HealthResponse};
use domain::{CreateUser, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
    ),
    components(schemas(User, CreateUser, HealthResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Users", description = "User directory endpoints"),
    )
)]
pub struct ApiDoc;
