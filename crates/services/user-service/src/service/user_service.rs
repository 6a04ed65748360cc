//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::AppResult;
use domain::{CreateUser, DomainError, User, USER_ENTITY};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: u64) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user from validated input
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: u64) -> AppResult<User> {
        info!("Retrieving user with ID: {}", id);
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found(USER_ENTITY))?;
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        info!("Retrieving all users");
        self.repo.list().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let user = self.repo.create(input).await?;
        info!("Created new user with ID: {}", user.id);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use common::AppError;

    use super::*;
    use crate::repository::MockUserRepository;

    fn create_test_user(id: u64) -> User {
        User {
            id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(create_test_user(id))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user(7).await.unwrap();

        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound("User")));
    }

    #[tokio::test]
    async fn test_create_user_delegates_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(User::new(3, input)));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(CreateUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

        let service = UserManager::new(Arc::new(repo));
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }
}
