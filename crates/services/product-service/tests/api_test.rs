//! Integration tests for the product catalog endpoints.
//!
//! User lookups go through a stub directory so no user-service is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, AppResult};
use domain::User;
use product_service_lib::client::UserDirectory;
use product_service_lib::routes::create_router;
use product_service_lib::state::AppState;

// =============================================================================
// Stub directory
// =============================================================================

/// Knows user 1 only; everything else is rejected with 404.
struct StubDirectory;

#[async_trait]
impl UserDirectory for StubDirectory {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        if id == "1" {
            Ok(User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            })
        } else {
            Err(AppError::UpstreamRejected {
                entity: "User",
                status: 404,
            })
        }
    }
}

/// Always fails at the transport level.
struct DownDirectory;

#[async_trait]
impl UserDirectory for DownDirectory {
    async fn get_user(&self, _id: &str) -> AppResult<User> {
        Err(AppError::upstream_unavailable("Connection error"))
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::seeded(Arc::new(StubDirectory)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "product-service"}));
}

#[tokio::test]
async fn test_list_products_returns_seeded_catalog() {
    let (status, body) = get(&app(), "/products").await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[2]["name"], "Headphones");
    assert_eq!(products[2]["in_stock"], false);
}

#[tokio::test]
async fn test_get_product() {
    let (status, body) = get(&app(), "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Laptop", "price": 999.99, "in_stock": true})
    );
}

#[tokio::test]
async fn test_product_not_found() {
    let app = app();
    for uri in ["/products/999", "/products/0", "/products/abc"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "Product not found"}));
    }
}

#[tokio::test]
async fn test_create_product() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/products",
        json!({"name": "Test Product", "price": 19.99, "in_stock": true}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Test Product");
    assert_eq!(body["price"], 19.99);
    assert_eq!(body["in_stock"], true);

    let (_, listed) = get(&app, "/products").await;
    assert_eq!(listed.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_product_defaults_in_stock() {
    let (status, body) =
        post_json(&app(), "/products", json!({"name": "Cable", "price": 0})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["in_stock"], true);
    assert_eq!(body["price"], 0.0);
}

#[tokio::test]
async fn test_create_product_invalid_request_leaves_catalog_unchanged() {
    let app = app();
    let invalid = [
        json!({"name": "No Price"}),
        json!({"price": 10.0}),
        json!({"name": "Negative", "price": -5}),
        json!({"name": "Text price", "price": "ten"}),
    ];

    for body in invalid {
        let (status, response) = post_json(&app, "/products", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response, json!({"error": "Invalid request"}));
    }

    let (_, listed) = get(&app, "/products").await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let app = app();
    let request = || Request::get("/products/3").body(Body::empty()).unwrap();
    let (_, first) = send(&app, request()).await;
    let (_, second) = send(&app, request()).await;
    assert_eq!(first, second);
}

// =============================================================================
// User products
// =============================================================================

#[tokio::test]
async fn test_user_products_success() {
    let (status, body) = get(&app(), "/products/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], 1);

    let names: Vec<&str> = body["recommended_products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laptop", "Smartphone"]);
}

#[tokio::test]
async fn test_user_products_user_not_found() {
    let (status, body) = get(&app(), "/products/user/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_user_products_service_error() {
    let app = create_router(AppState::seeded(Arc::new(DownDirectory)));
    let (status, body) = get(&app, "/products/user/1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Service communication error"}));
}

#[tokio::test]
async fn test_unsupported_method_is_rejected_with_json() {
    let app = app();
    for request in [
        Request::delete("/products/1").body(Body::empty()).unwrap(),
        Request::post("/products/user/1").body(Body::empty()).unwrap(),
    ] {
        let (status, bytes) = send(&app, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn test_openapi_document_lists_user_products() {
    let (status, body) = get(&app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/products/user/{user_id}").is_some());
}
