//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// State backed by a freshly seeded in-memory store.
    pub fn seeded() -> Self {
        let repo = Arc::new(UserStore::seeded());
        Self::new(Arc::new(UserManager::new(repo)))
    }
}
