use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use orders_rs::repositories::FileOrderRepository;
use orders_rs::services::OrderService;
use orders_rs::{create_app, Metrics};
use reqwest::Client;
use tokio::net::TcpListener;
use uuid::Uuid;

/// Boots the real application on an ephemeral port against a given backing
/// file. Booting a second environment on the same file models a process
/// restart.
pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
    pub data_file: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_backing_file(temp_backing_file()).await
    }

    pub async fn with_backing_file(data_file: PathBuf) -> Self {
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let repository = Arc::new(FileOrderRepository::new(data_file.clone()));
        let order_service = Arc::new(OrderService::new_with_metrics(repository, metrics.clone()));
        let app = create_app(metrics, order_service);

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
            data_file,
        }
    }

    /// Remove the backing file, if one was ever written.
    pub fn cleanup(&self) {
        std::fs::remove_file(&self.data_file).ok();
    }
}

pub fn temp_backing_file() -> PathBuf {
    std::env::temp_dir().join(format!("orders-it-{}.txt", Uuid::new_v4()))
}
