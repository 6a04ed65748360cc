//! HTTP client for user-service.
//!
//! Owns transport details only: URL building, timeouts, status handling
//! and decoding the user record.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use common::{AppError, AppResult, HttpClientConfig};
use domain::{User, USER_ENTITY};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User lookups needed by product-service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user record by ID, given as its decimal digits.
    ///
    /// A reply other than 200 is `UpstreamRejected`; an unreachable service
    /// or an unreadable body is `UpstreamUnavailable`.
    async fn get_user(&self, id: &str) -> AppResult<User>;
}

/// Reqwest wrapper for user-service.
pub struct HttpUserClient {
    client: Client,
    base_url: String,
}

impl HttpUserClient {
    /// Build a client with explicit connect and request timeouts.
    pub fn new(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

#[async_trait]
impl UserDirectory for HttpUserClient {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        let url = self.user_url(id);
        debug!("Calling user-service at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::upstream_unavailable(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::UpstreamRejected {
                entity: USER_ENTITY,
                status: status.as_u16(),
            });
        }

        response.json::<User>().await.map_err(|e| {
            AppError::upstream_unavailable(format!("invalid user payload from {}: {}", url, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpUserClient {
        HttpUserClient::new(&HttpClientConfig {
            base_url: base_url.to_string(),
            connect_timeout_ms: 500,
            request_timeout_ms: 1000,
        })
        .unwrap()
    }

    #[test]
    fn test_user_url_tolerates_trailing_slash() {
        assert_eq!(
            client("http://user-service:5000/").user_url("9"),
            "http://user-service:5000/users/9"
        );
        assert_eq!(
            client("http://localhost:5555").user_url("1"),
            "http://localhost:5555/users/1"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(&format!("http://{}", addr)).get_user("1").await;
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }
}
