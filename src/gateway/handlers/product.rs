//! Catalog handlers

use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ApiResult, ok};
use crate::models::Product;

/// List products
///
/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Full catalog in catalog order", body = Vec<Product>, content_type = "application/json")
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Product>> {
    ok(state.orders.list_products().to_vec())
}
