//! Product record, creation input and the composed user/products view.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_IN_STOCK, MIN_NAME_LENGTH, MIN_PRICE, RECOMMENDATION_COUNT};
use crate::user::User;

/// Product record held by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Monotonically assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u64,
    /// Product name
    #[cfg_attr(feature = "openapi", schema(example = "Laptop"))]
    pub name: String,
    /// Unit price, never negative
    #[cfg_attr(feature = "openapi", schema(example = 999.99))]
    pub price: f64,
    /// Availability flag
    pub in_stock: bool,
}

impl Product {
    /// Build a record from an assigned id and validated input.
    pub fn new(id: u64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            in_stock: input.in_stock.unwrap_or(DEFAULT_IN_STOCK),
        }
    }
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateProduct {
    /// Product name
    #[validate(length(min = MIN_NAME_LENGTH, message = "Name cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "Keyboard"))]
    pub name: String,
    /// Unit price
    #[validate(range(min = MIN_PRICE, message = "Price cannot be negative"))]
    #[cfg_attr(feature = "openapi", schema(example = 49.5))]
    pub price: f64,
    /// Availability flag, defaults to true
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// A user together with the products recommended to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProducts {
    pub user: User,
    pub recommended_products: Vec<Product>,
}

impl UserProducts {
    /// Pair a user with the head of the catalog.
    ///
    /// Recommendations ignore the user: they are the first
    /// [`RECOMMENDATION_COUNT`] products in catalog order, or fewer.
    pub fn recommend(user: User, catalog: Vec<Product>) -> Self {
        let recommended_products = catalog.into_iter().take(RECOMMENDATION_COUNT).collect();
        Self {
            user,
            recommended_products,
        }
    }
}

/// Products present when the catalog starts.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
            in_stock: true,
        },
        Product {
            id: 2,
            name: "Smartphone".to_string(),
            price: 499.99,
            in_stock: true,
        },
        Product {
            id: 3,
            name: "Headphones".to_string(),
            price: 99.99,
            in_stock: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> User {
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[test]
    fn test_in_stock_defaults_to_true() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"name":"Mouse","price":10.0}"#).unwrap();
        let product = Product::new(4, input);
        assert!(product.in_stock);
        assert_eq!(product.id, 4);
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let input = CreateProduct {
            name: "Mouse".to_string(),
            price: -1.0,
            in_stock: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_recommend_takes_first_two_in_order() {
        let view = UserProducts::recommend(john(), seed_products());
        let names: Vec<&str> = view
            .recommended_products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Laptop", "Smartphone"]);
    }

    #[test]
    fn test_recommend_with_short_catalog() {
        let one = seed_products().into_iter().take(1).collect();
        assert_eq!(UserProducts::recommend(john(), one).recommended_products.len(), 1);
        assert!(UserProducts::recommend(john(), Vec::new())
            .recommended_products
            .is_empty());
    }
}
