//! Product service - catalog business logic and the user/products view.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::AppResult;
use domain::{CreateProduct, DomainError, Product, UserProducts, PRODUCT_ENTITY};

use crate::client::UserDirectory;
use crate::repository::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Get product by ID
    async fn get_product(&self, id: u64) -> AppResult<Product>;

    /// List all products
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Create a new product from validated input
    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    /// Look the user up in user-service and attach recommendations.
    ///
    /// `user_id` is passed through as digits; user-service decides whether it exists.
    async fn get_user_products(&self, user_id: &str) -> AppResult<UserProducts>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
    users: Arc<dyn UserDirectory>,
}

impl ProductManager {
    pub fn new(repo: Arc<dyn ProductRepository>, users: Arc<dyn UserDirectory>) -> Self {
        Self { repo, users }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn get_product(&self, id: u64) -> AppResult<Product> {
        info!("Retrieving product with ID: {}", id);
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found(PRODUCT_ENTITY))?;
        Ok(product)
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        info!("Retrieving all products");
        self.repo.list().await
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        let product = self.repo.create(input).await?;
        info!("Created new product with ID: {}", product.id);
        Ok(product)
    }

    async fn get_user_products(&self, user_id: &str) -> AppResult<UserProducts> {
        info!("Retrieving recommended products for user with ID: {}", user_id);
        let user = self.users.get_user(user_id).await?;
        let catalog = self.repo.list().await?;
        Ok(UserProducts::recommend(user, catalog))
    }
}
