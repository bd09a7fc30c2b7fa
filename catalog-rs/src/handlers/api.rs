use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::ProductListResponse;
use crate::observability::Metrics;
use crate::services::CatalogService;

/// Shared application state for the catalog API
#[derive(Clone)]
pub struct ApiState {
    pub catalog_service: Arc<CatalogService>,
    pub metrics: Arc<Metrics>,
}

/// List the full product catalog.
///
/// Infallible: the catalog is a compiled-in constant, so there is no error
/// path and no status other than 200.
#[instrument(name = "list_products", skip(state))]
pub async fn list_products(State(state): State<ApiState>) -> Json<ProductListResponse> {
    let response = state.catalog_service.list_products();

    state.metrics.record_product_list_request();
    info!("Listed {} products", response.products.len());

    Json(response)
}
