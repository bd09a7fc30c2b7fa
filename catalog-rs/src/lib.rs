pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;

pub use config::{Config, ConfigError};
pub use observability::{init_observability, shutdown_observability, Metrics};

use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::services::CatalogService;

/// Build the full application router.
///
/// Lives in the library so the integration tests drive the exact router the
/// binary serves.
pub fn create_app(metrics: Arc<Metrics>, catalog_service: Arc<CatalogService>) -> Router {
    let metrics_for_middleware = metrics.clone();

    let api_state = handlers::api::ApiState {
        catalog_service,
        metrics: metrics.clone(),
    };

    Router::new()
        // Health and metrics endpoints (with metrics state)
        .route("/health/status", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics)
        // The catalog itself
        .route("/", get(handlers::api::list_products))
        .with_state(api_state)
        // Middleware layers (order matters - outer to inner)
        .layer(middleware::from_fn(handlers::security_headers_middleware))
        .layer(middleware::from_fn(handlers::cors_middleware))
        .layer(middleware::from_fn(move |req, next| {
            observability::observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
}
