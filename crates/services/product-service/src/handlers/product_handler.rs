//! Product handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, RecordId, ValidatedJson};
use domain::{CreateProduct, Product, UserProducts, PRODUCT_ENTITY, USER_ENTITY};

use crate::state::AppState;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product))
        .route("/user/:user_id", get(get_user_products))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products in creation order", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product record", body = Product),
        (status = 404, description = "Product not found", body = common::error::ErrorResponse)
    )
)]
pub async fn get_product(State(state): State<AppState>, id: RecordId) -> AppResult<Json<Product>> {
    let id = id.or_not_found(PRODUCT_ENTITY)?;
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid request", body = common::error::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a user from user-service with recommended products
#[utoipa::path(
    get,
    path = "/products/user/{user_id}",
    tag = "Products",
    params(
        ("user_id" = String, Path, description = "User ID in user-service, decimal digits")
    ),
    responses(
        (status = 200, description = "User with recommendations", body = UserProducts),
        (status = 404, description = "User not found", body = common::error::ErrorResponse),
        (status = 503, description = "User service unreachable", body = common::error::ErrorResponse)
    )
)]
pub async fn get_user_products(
    State(state): State<AppState>,
    user_id: RecordId,
) -> AppResult<Json<UserProducts>> {
    let user_id = user_id.digits_or_not_found(USER_ENTITY)?;
    let view = state.product_service.get_user_products(&user_id).await?;
    Ok(Json(view))
}
