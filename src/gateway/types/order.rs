//! Order request types and validation
//!
//! - `CreateOrderRequest` / `UpdateStatusRequest`: HTTP body deserialization
//! - `ValidatedOrder`: create request that passed validation
//! - `ApiJson`: lenient JSON body extractor
//! - `parse_order_id`: path id parsing (failure means "no such order")

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use utoipa::ToSchema;

use crate::gateway::services::OrderError;
use crate::models::{Catalog, OrderItem, OrderStatus};
use crate::money::{Amount, QuantityError, parse_quantity};

use super::response::ApiError;

// ============================================================================
// Request bodies
// ============================================================================

/// Create order request.
///
/// Fields are kept as raw JSON so validation can report the exact
/// client-facing error for each kind of bad input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Al")]
    pub customer_name: Option<Value>,
    /// `[{"productId": 1, "quantity": 2}, ...]`
    #[serde(default)]
    #[schema(value_type = Vec<Object>, example = json!([{"productId": 1, "quantity": 2}]))]
    pub items: Option<Value>,
}

/// Status update request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "shipped")]
    pub status: Option<Value>,
}

// ============================================================================
// Validation
// ============================================================================

/// Create request after validation: every item references a catalog
/// product and has a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
}

/// Validate a create request, failing on the first violation:
/// 1. `customerName` is a non-empty string and `items` is a non-empty array
/// 2. per item, in order: `productId` exists, then `quantity` is finite and > 0
pub fn validate_create_order(
    req: CreateOrderRequest,
    catalog: &Catalog,
) -> Result<ValidatedOrder, OrderError> {
    let customer_name = match req.customer_name {
        Some(Value::String(name)) if !name.is_empty() => name,
        _ => return Err(OrderError::MissingFields),
    };
    let raw_items = match req.items {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(OrderError::MissingFields),
    };

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in &raw_items {
        let raw_product_id = raw.get("productId");
        let product = raw_product_id
            .and_then(product_id_of)
            .and_then(|id| catalog.find(id))
            .ok_or_else(|| OrderError::InvalidProductId(display_raw(raw_product_id)))?;

        let quantity = raw
            .get("quantity")
            .ok_or(QuantityError::Invalid)
            .and_then(parse_quantity)
            .map_err(|e| match e {
                QuantityError::Invalid => OrderError::InvalidQuantity,
                QuantityError::OutOfRange => OrderError::QuantityOutOfRange,
            })?;

        items.push(OrderItem {
            product_id: product.id,
            quantity: Amount::new(quantity),
        });
    }

    Ok(ValidatedOrder {
        customer_name,
        items,
    })
}

/// Product ids match JSON numbers only (`1` and `1.0` alike), never strings.
fn product_id_of(raw: &Value) -> Option<u64> {
    let Value::Number(n) = raw else {
        return None;
    };
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// Render a raw client value for error messages.
fn display_raw(raw: Option<&Value>) -> String {
    match raw {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => display_raw(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Exact match against the five status names; anything else is `None`.
pub fn parse_status(req: &UpdateStatusRequest) -> Option<OrderStatus> {
    req.status.as_ref()?.as_str()?.parse().ok()
}

/// Parse an order id from the request path.
///
/// Surrounding whitespace is ignored and integral decimals (`"1.0"`) are
/// accepted. Anything else, including `0`, is `None`.
pub fn parse_order_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let id = raw.parse::<u64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })?;
    (id > 0).then_some(id)
}

// ============================================================================
// ApiJson: lenient JSON body extractor
// ============================================================================

/// JSON body extractor.
///
/// A missing body, or one not sent as `application/json`, yields
/// `T::default()` so field validation reports what is missing. A JSON body
/// that fails to parse, or is not an object, is a 400 `Invalid JSON: ...`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

fn is_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(&req);
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid body: {}", e.body_text())))?;

        if !is_json || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiJson(T::default()));
        }

        let invalid = |detail: String| ApiError::bad_request(format!("Invalid JSON: {}", detail));
        // Only objects map onto the request struct
        match serde_json::from_slice::<Value>(&body).map_err(|e| invalid(e.to_string()))? {
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(ApiJson)
                .map_err(|e| invalid(e.to_string())),
            _ => Err(invalid("expected a JSON object".to_string())),
        }
    }
}
