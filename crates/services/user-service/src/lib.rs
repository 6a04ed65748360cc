//! User Service Library
//!
//! This crate provides the user directory over HTTP/JSON.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use crate::config::UserServiceConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the user service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UserServiceConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;
    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(AppState::seeded());

    let listener = common::server::bind("User service", &config.server.bind_addr()).await?;
    common::server::serve(listener, app).await?;

    Ok(())
}
