//! User repository backed by the in-memory record store.

use async_trait::async_trait;

use common::{AppResult, RecordStore};
use domain::{seed_users, CreateUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>>;

    /// Create a new user with the next id
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// List all users in creation order
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    records: RecordStore<User>,
}

impl UserStore {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: RecordStore::new(),
        }
    }

    /// Create a repository holding the default users
    pub fn seeded() -> Self {
        Self {
            records: RecordStore::with_records(seed_users()),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        Ok(self.records.get(id).await)
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        Ok(self.records.append(|id| User::new(id, input)).await)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.records.list().await)
    }
}
