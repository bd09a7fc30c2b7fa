use serde::{Deserialize, Serialize};

/// The compiled-in product catalog, in display order.
///
/// The list is immutable at runtime; there is no create, update, or delete
/// path anywhere in the service.
pub const PRODUCTS: [&str; 3] = ["Laptop", "Phone", "Tablet"];

/// Response model for the product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<String>,
}
