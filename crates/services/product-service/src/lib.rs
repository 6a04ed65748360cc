//! Product Service Library
//!
//! This crate provides the product catalog over HTTP/JSON, plus one
//! endpoint that enriches its answer with a user fetched from user-service.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod client;
pub mod config;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::sync::Arc;

use tracing::info;

use crate::client::HttpUserClient;
use crate::config::ProductServiceConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the product service as an embedded component (for combined binary).
///
/// `user_service_url` overrides `USER_SERVICE_URL` when given.
pub async fn run_embedded(
    host: &str,
    port: u16,
    user_service_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ProductServiceConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;
    if let Some(url) = user_service_url {
        config.user_service.base_url = url;
    }
    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    config: ProductServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Using user-service at {} (timeout {} ms)",
        config.user_service.base_url, config.user_service.request_timeout_ms
    );
    let users = Arc::new(HttpUserClient::new(&config.user_service)?);
    let app = create_router(AppState::seeded(users));

    let listener = common::server::bind("Product service", &config.server.bind_addr()).await?;
    common::server::serve(listener, app).await?;

    Ok(())
}
