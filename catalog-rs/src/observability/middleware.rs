use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, Instrument};

use super::Metrics;

/// Middleware for automatic request tracing and metrics collection
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    // Matched path groups metrics by route template rather than raw URI
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| uri.clone());

    let span_name = format!("{} {}", method, endpoint);

    let span = tracing::info_span!(
        target: "catalog_rs::http",
        "http_request",
        otel.name = %span_name,
        otel.kind = "server",
        http.method = %method,
        http.route = %endpoint,
        http.url = %uri,
        http.status_code = tracing::field::Empty,
    );

    async {
        metrics.increment_in_flight(&method, &endpoint);

        info!(method = %method, path = %endpoint, "Processing request");

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let status_code = response.status().as_u16();

        tracing::Span::current().record("http.status_code", status_code);

        metrics.record_http_request(&method, &endpoint, status_code, duration.as_secs_f64());
        metrics.decrement_in_flight(&method, &endpoint);

        if status_code >= 400 {
            error!(
                method = %method,
                path = %endpoint,
                status_code = status_code,
                duration_ms = duration.as_millis() as u64,
                "Request completed with error"
            );
        } else {
            info!(
                method = %method,
                path = %endpoint,
                status_code = status_code,
                duration_ms = duration.as_millis() as u64,
                "Request completed successfully"
            );
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "test response"
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    #[tokio::test]
    async fn test_observability_middleware_success() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let metrics_clone = metrics.clone();

        let app = Router::new()
            .route("/test", get(test_handler))
            .layer(middleware::from_fn(move |req, next| {
                observability_middleware(metrics_clone.clone(), req, next)
            }));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/test")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let encoded = metrics.encode().unwrap();
        assert!(encoded.contains("http_requests_total"));
    }

    #[tokio::test]
    async fn test_observability_middleware_error() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let metrics_clone = metrics.clone();

        let app = Router::new()
            .route("/error", get(error_handler))
            .layer(middleware::from_fn(move |req, next| {
                observability_middleware(metrics_clone.clone(), req, next)
            }));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/error")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let encoded = metrics.encode().unwrap();
        assert!(encoded.contains("http_requests_total"));
    }
}
