//! Domain-level constants.

// =============================================================================
// Service identity
// =============================================================================

/// Name reported by the directory service health check
pub const USER_SERVICE_NAME: &str = "user-service";

/// Name reported by the catalog service health check
pub const PRODUCT_SERVICE_NAME: &str = "product-service";

/// Status reported by a live service
pub const STATUS_HEALTHY: &str = "healthy";

/// Directory base URL the catalog calls when none is configured
pub const DEFAULT_USER_SERVICE_URL: &str = "http://user-service:5000";

// =============================================================================
// Entities
// =============================================================================

/// Entity label used in user error messages
pub const USER_ENTITY: &str = "User";

/// Entity label used in product error messages
pub const PRODUCT_ENTITY: &str = "Product";

// =============================================================================
// Catalog rules
// =============================================================================

/// Number of products returned alongside a user
pub const RECOMMENDATION_COUNT: usize = 2;

/// Stock flag applied when a create request omits it
pub const DEFAULT_IN_STOCK: bool = true;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: u64 = 1;

/// Lowest accepted product price
pub const MIN_PRICE: f64 = 0.0;
