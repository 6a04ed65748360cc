//! User service configuration.

use common::ServiceConfig;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5555;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Bind address and port
    pub server: ServiceConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env(DEFAULT_PORT),
        }
    }
}
