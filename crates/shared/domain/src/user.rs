//! User record and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::MIN_NAME_LENGTH;

/// User record held by the directory service.
///
/// Records are created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Monotonically assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Contact email address
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
}

impl User {
    /// Build a record from an assigned id and validated input.
    pub fn new(id: u64, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = MIN_NAME_LENGTH, message = "Name cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "Alice Example"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
}

/// Users present when the directory starts.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_requires_both_fields() {
        let missing_email = serde_json::from_str::<CreateUser>(r#"{"name":"A"}"#);
        assert!(missing_email.is_err());

        let missing_name = serde_json::from_str::<CreateUser>(r#"{"email":"a@b.c"}"#);
        assert!(missing_name.is_err());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let input = CreateUser {
            name: String::new(),
            email: "a@b.c".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u64> = seed_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
