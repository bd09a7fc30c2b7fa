pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

pub use config::{Config, ConfigError};
pub use observability::{init_observability, shutdown_observability, Metrics};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::services::OrderService;

/// Build the full application router.
///
/// Lives in the library so the integration tests drive the exact router the
/// binary serves.
pub fn create_app(metrics: Arc<Metrics>, order_service: Arc<OrderService>) -> Router {
    let metrics_for_middleware = metrics.clone();

    let api_state = handlers::api::ApiState { order_service };

    Router::new()
        // Health and metrics endpoints (with metrics state)
        .route("/health/status", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics)
        // Order submission and listing
        .route(
            "/orders",
            post(handlers::api::create_order).get(handlers::api::list_orders),
        )
        .with_state(api_state)
        // Middleware layers (order matters - outer to inner)
        .layer(middleware::from_fn(handlers::security_headers_middleware))
        .layer(middleware::from_fn(handlers::cors_middleware))
        .layer(middleware::from_fn(move |req, next| {
            observability::observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
}
