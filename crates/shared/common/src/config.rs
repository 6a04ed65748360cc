//! Shared configuration structures.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use domain::DEFAULT_USER_SERVICE_URL;
use serde::{Deserialize, Serialize};

/// Default bind address for every service
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Load `HOST` and `PORT`, falling back to the service's default port.
    pub fn from_env(default_port: u16) -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", default_port),
        }
    }

    /// Socket address string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Base URL of the called service (e.g., "http://user-service:5000")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl HttpClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_USER_SERVICE_URL.to_string(),
            connect_timeout_ms: 2000,
            request_timeout_ms: 5000,
        }
    }
}

/// Read and parse an environment variable, using `default` when it is
/// unset or does not parse.
pub fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
