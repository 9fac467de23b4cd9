//! Gateway Services Layer
//!
//! Business logic extracted from handlers. Handlers are thin HTTP adapters
//! that delegate to services.

pub mod order;

pub use order::{OrderError, OrderService, calculate_total};
