//! Application state for dependency injection.

use std::sync::Arc;

use crate::client::UserDirectory;
use crate::repository::ProductStore;
use crate::service::{ProductManager, ProductService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(product_service: Arc<dyn ProductService>) -> Self {
        Self { product_service }
    }

    /// State backed by a freshly seeded catalog and the given user directory.
    pub fn seeded(users: Arc<dyn UserDirectory>) -> Self {
        let repo = Arc::new(ProductStore::seeded());
        Self::new(Arc::new(ProductManager::new(repo, users)))
    }
}
