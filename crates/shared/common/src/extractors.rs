//! Request extractors shared by the services.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use domain::DomainError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that automatically validates the payload.
///
/// Any rejection (missing body, wrong content type, malformed JSON,
/// missing field) and any failed rule becomes [`AppError::Validation`].
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(DomainError::from)?;

        Ok(ValidatedJson(value))
    }
}

/// Integer id taken from the last path parameter.
///
/// Any all-digit segment is accepted and kept as its canonical digits
/// (leading zeros dropped), so ids wider than `u64` can still be forwarded
/// to another service. Anything else carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(Option<String>);

impl RecordId {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return RecordId(None);
        }
        let trimmed = raw.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        RecordId(Some(digits.to_string()))
    }

    /// Canonical digits, if the segment was an integer.
    pub fn digits(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The id as a local key, or a not found error for `entity`.
    ///
    /// Ids too wide for `u64` cannot match a stored record.
    pub fn or_not_found(&self, entity: &'static str) -> Result<u64, AppError> {
        self.digits()
            .and_then(|digits| digits.parse().ok())
            .ok_or(AppError::NotFound(entity))
    }

    /// The canonical digits for forwarding, or a not found error for `entity`.
    pub fn digits_or_not_found(self, entity: &'static str) -> Result<String, AppError> {
        self.0.ok_or(AppError::NotFound(entity))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::internal(e.body_text()))?;

        Ok(RecordId::parse(&raw))
    }
}
