//! Product repository backed by the in-memory record store.

use async_trait::async_trait;

use common::{AppResult, RecordStore};
use domain::{seed_products, CreateProduct, Product};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Product>>;

    /// Create a new product with the next id
    async fn create(&self, input: CreateProduct) -> AppResult<Product>;

    /// List all products in creation order
    async fn list(&self) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    records: RecordStore<Product>,
}

impl ProductStore {
    /// Create a repository holding the default catalog
    pub fn seeded() -> Self {
        Self {
            records: RecordStore::with_records(seed_products()),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Product>> {
        Ok(self.records.get(id).await)
    }

    async fn create(&self, input: CreateProduct) -> AppResult<Product> {
        Ok(self.records.append(|id| Product::new(id, input)).await)
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.records.list().await)
    }
}
