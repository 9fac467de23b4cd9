//! Handler helper functions

use std::time::{SystemTime, UNIX_EPOCH};

use super::super::types::ApiError;

/// Current time in milliseconds since the Unix epoch (0 if the clock is
/// before the epoch).
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Not found")
}
