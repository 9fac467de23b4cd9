// models.rs - Catalog, order and status types

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::money::Amount;

// ============================================================
// PRODUCT CATALOG
// ============================================================

/// A purchasable product. Seeded at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "T-Shirt")]
    pub name: String,
    #[schema(value_type = f64, example = 19.99)]
    pub price: Amount,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price: Amount::new(price),
        }
    }
}

/// Fixed product list, kept in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Product ids are expected to be unique; lookups return the first match.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in catalog served by the API.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "T-Shirt", Decimal::new(1999, 2)),
            Product::new(2, "Jeans", Decimal::new(4999, 2)),
            Product::new(3, "Sneakers", Decimal::new(8999, 2)),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

// ============================================================
// ORDER STATUS
// ============================================================

/// Order lifecycle status.
///
/// Any status may follow any other (including itself); there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in the order used for error messages.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// "pending, confirmed, shipped, delivered, cancelled"
    pub fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|st| st.as_str() == s).ok_or(())
    }
}

// ============================================================
// ORDER
// ============================================================

/// One line of an order, as accepted at creation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[schema(example = 1)]
    pub product_id: u64,
    #[schema(value_type = f64, example = 2)]
    pub quantity: Amount,
}

/// A customer's order.
///
/// Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Al")]
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    /// Sum of price x quantity, rounded to cents when the order was created.
    #[schema(value_type = f64, example = 39.98)]
    pub total: Amount,
    pub status: OrderStatus,
    #[serde(serialize_with = "serialize_iso_millis")]
    #[schema(value_type = String, example = "2024-01-01T12:00:00.000Z")]
    pub created_at: DateTime<Utc>,
}

/// `2024-01-01T12:00:00.000Z`
fn serialize_iso_millis<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
