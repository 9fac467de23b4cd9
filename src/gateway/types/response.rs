//! API response types and errors
//!
//! Success bodies are the resource itself (no envelope). Failures are
//! `{"error": "<message>"}` with a 4xx status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::services::OrderError;

/// Error body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Order not found")]
    pub error: String,
}

/// Error returned from a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let status = match err {
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::MissingFields
            | OrderError::InvalidProductId(_)
            | OrderError::InvalidQuantity
            | OrderError::QuantityOutOfRange
            | OrderError::TotalOutOfRange
            | OrderError::InvalidStatus => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Handler result: status + JSON body, or an `ApiError`
pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// 200 OK
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

/// 201 Created
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_status_mapping() {
        assert_eq!(ApiError::from(OrderError::NotFound).status, StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(OrderError::InvalidStatus),
            ApiError::bad_request(
                "status must be one of: pending, confirmed, shipped, delivered, cancelled"
            )
        );
        assert_eq!(
            ApiError::from(OrderError::InvalidProductId("99".into())).message,
            "Invalid productId: 99"
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Order not found".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"error": "Order not found"}));
    }
}
