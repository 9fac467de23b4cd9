//! Order Service - in-memory order management REST API
//!
//! A fixed product catalog plus a mutable, lock-guarded collection of orders,
//! served over HTTP/JSON with axum.
//!
//! # Modules
//!
//! - [`models`] - Product, Catalog, Order, OrderItem, OrderStatus
//! - [`money`] - Decimal rounding, quantity parsing, JSON-number amounts
//! - [`gateway`] - HTTP router, handlers, services, request/response types
//! - [`config`] - YAML configuration with CLI / `PORT` override
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod money;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use gateway::services::{OrderError, OrderService};
pub use gateway::state::AppState;
pub use gateway::{build_router, run_server};
pub use models::{Catalog, Order, OrderItem, OrderStatus, Product};
pub use money::Amount;
