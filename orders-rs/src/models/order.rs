use serde::{Deserialize, Serialize};

/// Confirmation returned for every accepted order submission.
///
/// Orders carry no identifier, timestamp, or status of their own; the
/// confirmation is the same fixed object for every payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub status: String,
}

impl CreateOrderResponse {
    pub fn created() -> Self {
        Self {
            status: "order created".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_response_serialization() {
        let response = CreateOrderResponse::created();

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"order created"}"#);
    }
}
