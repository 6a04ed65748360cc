//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a not found error for the given entity label
    pub fn not_found(entity: &'static str) -> Self {
        DomainError::NotFound(entity)
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Keep the first field message only
        let message = errors
            .field_errors()
            .values()
            .next()
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());
        DomainError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::CreateUser;

    #[test]
    fn test_validation_errors_keep_first_message() {
        let input = CreateUser {
            name: String::new(),
            email: "a@b.c".to_string(),
        };
        let err = DomainError::from(input.validate().unwrap_err());
        assert_eq!(err, DomainError::validation("Name cannot be empty"));
    }

    #[test]
    fn test_not_found_message_names_entity() {
        assert_eq!(DomainError::not_found("Product").to_string(), "Product not found");
    }
}
