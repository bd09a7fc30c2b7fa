use std::sync::Arc;
use std::time::Duration;

use catalog_rs::services::CatalogService;
use catalog_rs::{create_app, Metrics};
use reqwest::Client;
use tokio::net::TcpListener;

/// Boots the real application on an ephemeral port.
pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let catalog_service = Arc::new(CatalogService::new());
        let app = create_app(metrics, catalog_service);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        Self {
            client: Client::new(),
            base_url,
        }
    }
}
