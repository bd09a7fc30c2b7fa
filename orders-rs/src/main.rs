use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use orders_rs::{
    create_app, init_observability, repositories::FileOrderRepository, services::OrderService,
    shutdown_observability, Config, Metrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (basic logging only)
    let config = Config::from_environment().context("failed to load configuration")?;

    init_observability(
        &config.observability.service_name,
        &config.observability.service_version,
        config.observability.otlp_endpoint.as_deref(),
        config.observability.enable_json_logging,
    )?;

    info!("Starting orders-rs service");
    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );
    info!("Backing file: {}", config.storage.data_file);

    let metrics = Arc::new(Metrics::new()?);
    info!("Metrics initialized successfully");

    let repository = Arc::new(FileOrderRepository::new(config.storage.data_file.clone()));
    let order_service = Arc::new(OrderService::new_with_metrics(repository, metrics.clone()));
    info!("Order service initialized successfully");

    let app = create_app(metrics, order_service);

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .context("invalid server host address")?,
        config.server.port,
    );

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    // Set up graceful shutdown
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
        shutdown_observability().await;
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
