use std::time::Instant;

use super::services::OrderService;
use crate::models::Catalog;

/// Gateway application state (shared via `Arc`)
#[derive(Debug)]
pub struct AppState {
    /// Catalog + order book
    pub orders: OrderService,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            orders: OrderService::new(catalog),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}
