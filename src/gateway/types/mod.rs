//! Gateway types module
//!
//! ## Input Types
//! - [`CreateOrderRequest`], [`UpdateStatusRequest`]: request bodies
//! - [`ValidatedOrder`]: create request after validation
//! - [`ApiJson`]: lenient JSON body extractor
//!
//! ## Output Types
//! - [`ApiError`], [`ApiResult`]: handler results and `{"error": ...}` bodies
//!
//! ## Submodules
//! - [`order`]: request types and validation
//! - [`response`]: response helpers and errors

pub mod order;
pub mod response;

pub use order::{
    ApiJson, CreateOrderRequest, UpdateStatusRequest, ValidatedOrder, parse_order_id,
    parse_status, validate_create_order,
};
pub use response::{ApiError, ApiResult, ErrorResponse, created, ok};
