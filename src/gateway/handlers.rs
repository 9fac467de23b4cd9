//! HTTP handlers, grouped by resource

pub mod health;
pub mod helpers;
pub mod order;
pub mod product;

pub use health::{HealthResponse, health_check};
pub use helpers::route_not_found;
pub use order::{create_order, delete_order, get_order, list_orders, update_order_status};
pub use product::list_products;
