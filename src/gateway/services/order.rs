//! Order Service - business logic for the order collection
//!
//! Owns the catalog and the order book (orders + id counter). Handlers are
//! thin HTTP adapters that delegate here.
//!
//! Every read-modify-write sequence (allocate id + append, find + mutate,
//! find + remove) runs under the single order-book lock. The lock is never
//! held across an `.await`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::gateway::types::{
    CreateOrderRequest, UpdateStatusRequest, ValidatedOrder, parse_status, validate_create_order,
};
use crate::models::{Catalog, Order, OrderItem, OrderStatus, Product};
use crate::money::{Amount, round_currency};

/// Order service error
///
/// The `Display` text is the message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("customerName and items are required")]
    MissingFields,

    #[error("Invalid productId: {0}")]
    InvalidProductId(String),

    #[error("quantity must be > 0")]
    InvalidQuantity,

    #[error("quantity is out of range")]
    QuantityOutOfRange,

    #[error("order total is out of range")]
    TotalOutOfRange,

    #[error("status must be one of: {}", OrderStatus::valid_list())]
    InvalidStatus,

    #[error("Order not found")]
    NotFound,
}

/// Orders in creation order plus the next id to hand out.
#[derive(Debug)]
struct OrderBook {
    orders: Vec<Order>,
    next_id: u64,
}

impl OrderBook {
    fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, order_id: u64) -> Option<usize> {
        self.orders.iter().position(|o| o.id == order_id)
    }
}

/// Sum of price x quantity over the items, or `None` if it overflows `Decimal`.
///
/// Items whose product is unknown or whose quantity is not positive add
/// nothing. Validation already rejects both, so this only matters if an
/// unvalidated item ever reaches it.
pub fn calculate_total(catalog: &Catalog, items: &[OrderItem]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |sum, item| {
        let qty = item.quantity.value();
        match catalog.find(item.product_id) {
            Some(product) if qty > Decimal::ZERO => {
                sum.checked_add(product.price.value().checked_mul(qty)?)
            }
            _ => Some(sum),
        }
    })
}

/// Order Service - handles all order-related business logic
#[derive(Debug)]
pub struct OrderService {
    catalog: Catalog,
    book: Mutex<OrderBook>,
}

impl OrderService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            book: Mutex::new(OrderBook::new()),
        }
    }

    /// A panic while holding the lock leaves the book consistent (every
    /// mutation is a single push/assign/remove), so poisoning is ignored.
    fn book(&self) -> MutexGuard<'_, OrderBook> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All products in catalog order
    pub fn list_products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Snapshot of all orders in creation order
    pub fn list_orders(&self) -> Vec<Order> {
        let orders = self.book().orders.clone();
        tracing::debug!("[ORDER] Listing {} orders", orders.len());
        orders
    }

    pub fn order_count(&self) -> usize {
        self.book().orders.len()
    }

    /// Look up one order. `None` (an unparsable path id) never matches.
    pub fn get_order(&self, order_id: Option<u64>) -> Result<Order, OrderError> {
        let order_id = order_id.ok_or(OrderError::NotFound)?;
        let book = self.book();
        book.position(order_id)
            .map(|idx| book.orders[idx].clone())
            .ok_or(OrderError::NotFound)
    }

    /// Validate, price and append a new order.
    pub fn create_order(&self, req: CreateOrderRequest) -> Result<Order, OrderError> {
        let ValidatedOrder {
            customer_name,
            items,
        } = validate_create_order(req, &self.catalog).inspect_err(|e| {
            tracing::warn!("[ORDER] Create rejected: {}", e);
        })?;

        let total = calculate_total(&self.catalog, &items)
            .map(round_currency)
            .ok_or(OrderError::TotalOutOfRange)
            .inspect_err(|e| tracing::warn!("[ORDER] Create rejected: {}", e))?;

        let order = {
            let mut book = self.book();
            let order = Order {
                id: book.next_id,
                customer_name,
                items,
                total: Amount::new(total),
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            };
            book.next_id += 1;
            book.orders.push(order.clone());
            order
        };

        tracing::info!(
            "[ORDER] Created order {} for {} ({} items, total {})",
            order.id,
            order.customer_name,
            order.items.len(),
            order.total
        );
        Ok(order)
    }

    /// Overwrite the status of an existing order.
    ///
    /// Existence is checked before the status value. Any valid status is
    /// accepted regardless of the current one.
    pub fn update_status(
        &self,
        order_id: Option<u64>,
        req: UpdateStatusRequest,
    ) -> Result<Order, OrderError> {
        let mut book = self.book();
        let idx = order_id
            .and_then(|id| book.position(id))
            .ok_or(OrderError::NotFound)?;

        let Some(status) = parse_status(&req) else {
            tracing::warn!(
                "[ORDER] Status update for order {} rejected: {:?}",
                book.orders[idx].id,
                req.status
            );
            return Err(OrderError::InvalidStatus);
        };

        let order = &mut book.orders[idx];
        let previous = order.status;
        order.status = status;
        tracing::info!(
            "[ORDER] Order {} status {} -> {}",
            order.id,
            previous,
            status
        );
        Ok(order.clone())
    }

    /// Remove an order, returning its last state. Remaining orders keep
    /// their relative order; the id is never handed out again.
    pub fn delete_order(&self, order_id: Option<u64>) -> Result<Order, OrderError> {
        let mut book = self.book();
        let idx = order_id
            .and_then(|id| book.position(id))
            .ok_or(OrderError::NotFound)?;
        let removed = book.orders.remove(idx);
        tracing::info!("[ORDER] Deleted order {}", removed.id);
        Ok(removed)
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}
