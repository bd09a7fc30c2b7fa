use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn test_list_products_exact_body() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;
    let base_url = &test_env.base_url;

    let response = client
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, r#"{"products":["Laptop","Phone","Tablet"]}"#);
}

#[tokio::test]
async fn test_list_products_is_stable() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;
    let base_url = &test_env.base_url;

    // Same body no matter how often, or with what noise, it is called
    for uri in ["/", "/?page=2", "/?category=phones"] {
        let response = client
            .get(format!("{}{}", base_url, uri))
            .header("x-custom-header", "noise")
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status().as_u16(), 200);

        let payload: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(payload, json!({"products": ["Laptop", "Phone", "Tablet"]}));
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let test_env = TestEnvironment::new().await;

    let response = test_env
        .client
        .get(format!("{}/products", test_env.base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_health_endpoint() {
    let test_env = TestEnvironment::new().await;

    let response = test_env
        .client
        .get(format!("{}/health/status", test_env.base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let health_response: serde_json::Value =
        response.json().await.expect("Failed to parse response");
    assert_eq!(health_response["status"], "healthy");
    assert_eq!(health_response["service"], "catalog-rs");
}

#[tokio::test]
async fn test_metrics_endpoint_reports_traffic() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;
    let base_url = &test_env.base_url;

    // Generate some traffic first
    client
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .get(format!("{}/metrics", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("product_list_requests_total"));
}
