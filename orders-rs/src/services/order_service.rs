use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use crate::models::{RepositoryError, RepositoryResult, ServiceResult};
use crate::observability::Metrics;
use crate::repositories::OrderRepository;

/// Service for submitting and listing orders
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
    metrics: Option<Arc<Metrics>>,
}

impl OrderService {
    /// Create a new OrderService
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            repository,
            metrics: None,
        }
    }

    /// Create a new OrderService that records storage metrics
    pub fn new_with_metrics(repository: Arc<dyn OrderRepository>, metrics: Arc<Metrics>) -> Self {
        Self {
            repository,
            metrics: Some(metrics),
        }
    }

    /// Persist one order: the payload's compact JSON text becomes one line
    /// in the backing file. The payload is not validated or reshaped.
    #[instrument(skip(self, payload))]
    pub async fn submit_order(&self, payload: &Value) -> ServiceResult<()> {
        let line = serde_json::to_string(payload).map_err(RepositoryError::from)?;

        self.timed_storage_operation("append", self.repository.append_line(&line))
            .await?;

        if let Some(ref metrics) = self.metrics {
            metrics.record_order_submitted();
        }

        info!("Order accepted");
        Ok(())
    }

    /// Return every stored order line verbatim. `None` means the backing
    /// file does not exist yet.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> ServiceResult<Option<Vec<String>>> {
        let lines = self
            .timed_storage_operation("read_all", self.repository.read_all())
            .await?;

        match &lines {
            Some(lines) => info!("Read {} stored order lines", lines.len()),
            None => info!("No backing file yet"),
        }

        Ok(lines)
    }

    async fn timed_storage_operation<T>(
        &self,
        operation: &str,
        future: impl std::future::Future<Output = RepositoryResult<T>>,
    ) -> RepositoryResult<T> {
        let start_time = Instant::now();
        let result = future.await;

        if let Some(ref metrics) = self.metrics {
            metrics.record_storage_operation(
                operation,
                result.is_ok(),
                start_time.elapsed().as_secs_f64(),
            );
        }

        result
    }
}
