use tracing::{info, instrument};

use crate::models::{ProductListResponse, PRODUCTS};

/// Service exposing the fixed product catalog.
///
/// The catalog never changes at runtime, so the service carries no state and
/// no repository behind it.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// List every product, in catalog order.
    #[instrument(skip(self))]
    pub fn list_products(&self) -> ProductListResponse {
        info!("Listing the product catalog");

        ProductListResponse {
            products: PRODUCTS.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn product_count(&self) -> usize {
        PRODUCTS.len()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_returns_fixed_catalog() {
        let service = CatalogService::new();
        let response = service.list_products();

        assert_eq!(response.products, vec!["Laptop", "Phone", "Tablet"]);
    }

    #[test]
    fn test_list_products_is_stable_across_calls() {
        let service = CatalogService::new();

        let first = service.list_products();
        let second = service.list_products();

        assert_eq!(first, second);
        assert_eq!(service.product_count(), 3);
    }
}
