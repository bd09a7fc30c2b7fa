use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::models::{CreateOrderResponse, ServiceError};
use crate::services::OrderService;

/// Shared application state for the orders API
#[derive(Clone)]
pub struct ApiState {
    pub order_service: Arc<OrderService>,
}

/// Submit an order.
///
/// Any JSON body is accepted verbatim and recorded as one text line; an
/// absent or unparseable body degrades to `null` and is still recorded.
/// The response is the same 201 confirmation in every accepted case.
#[instrument(name = "create_order", skip(state, body))]
pub async fn create_order(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateOrderResponse>), (StatusCode, Json<Value>)> {
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(_) => {
            warn!("Order body absent or not valid JSON, recording null");
            Value::Null
        }
    };

    match state.order_service.submit_order(&payload).await {
        Ok(()) => {
            info!("Order created");
            Ok((StatusCode::CREATED, Json(CreateOrderResponse::created())))
        }
        Err(err) => {
            error!("Failed to persist order: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// List every stored order as raw text lines.
///
/// The wire shape is asymmetric on purpose: a missing backing file answers
/// with `{"orders": []}`, an existing one with a bare array of lines,
/// trailing newlines included.
#[instrument(name = "list_orders", skip(state))]
pub async fn list_orders(
    State(state): State<ApiState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.order_service.list_orders().await {
        Ok(Some(lines)) => {
            info!("Listed {} orders", lines.len());
            Ok(Json(Value::from(lines)))
        }
        Ok(None) => {
            info!("No orders stored yet");
            Ok(Json(json!({ "orders": [] })))
        }
        Err(err) => {
            error!("Failed to read orders: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Convert ServiceError to HTTP response
fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    let message = match err {
        ServiceError::Storage { .. } => "Internal server error".to_string(),
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
