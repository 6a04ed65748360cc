//! OpenAPI documentation.

use utoipa::OpenApi;

use common::{error::ErrorResponse, HealthResponse};
use domain::{CreateProduct, Product, User, UserProducts};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::get_user_products,
    ),
    components(schemas(
        Product,
        CreateProduct,
        User,
        UserProducts,
        HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;
