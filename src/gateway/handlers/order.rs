//! Order handlers (list, get, create, update status, delete)
//!
//! Path ids arrive as raw strings; one that does not parse is treated as an
//! id no order has, so it yields 404 rather than a parse error.

use std::sync::Arc;

use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{
    ApiJson, ApiResult, CreateOrderRequest, ErrorResponse, UpdateStatusRequest, created, ok,
    parse_order_id,
};
use crate::models::Order;

/// List orders
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders in creation order", body = Vec<Order>, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    ok(state.orders.list_orders())
}

/// Get single order by ID
///
/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = Order, content_type = "application/json"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Order> {
    tracing::debug!("[ORDER] Get order {}", id);
    ok(state.orders.get_order(parse_order_id(&id))?)
}

/// Create order
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body(content = CreateOrderRequest, description = "Customer name and items", content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = Order, content_type = "application/json"),
        (status = 400, description = "Missing fields, invalid productId or quantity", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> ApiResult<Order> {
    created(state.orders.create_order(req)?)
}

/// Update order status
///
/// PATCH /orders/{id}/status
#[utoipa::path(
    patch,
    path = "/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body(content = UpdateStatusRequest, description = "New status", content_type = "application/json"),
    responses(
        (status = 200, description = "Updated order", body = Order, content_type = "application/json"),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> ApiResult<Order> {
    ok(state.orders.update_status(parse_order_id(&id), req)?)
}

/// Delete order
///
/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The deleted order", body = Order, content_type = "application/json"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Order> {
    ok(state.orders.delete_order(parse_order_id(&id))?)
}
