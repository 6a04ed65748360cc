//! Product service configuration.

use std::env;

use common::{parse_or, HttpClientConfig, ServiceConfig};

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5556;

/// Product service configuration.
#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    /// Bind address and port
    pub server: ServiceConfig,
    /// Outbound client settings for the user directory
    pub user_service: HttpClientConfig,
}

impl ProductServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            server: ServiceConfig::from_env(DEFAULT_PORT),
            user_service: HttpClientConfig {
                base_url: env::var("USER_SERVICE_URL").unwrap_or(defaults.base_url),
                connect_timeout_ms: parse_or(
                    "USER_SERVICE_CONNECT_TIMEOUT_MS",
                    defaults.connect_timeout_ms,
                ),
                request_timeout_ms: parse_or("USER_SERVICE_TIMEOUT_MS", defaults.request_timeout_ms),
            },
        }
    }
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                host: common::DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            user_service: HttpClientConfig::default(),
        }
    }
}
