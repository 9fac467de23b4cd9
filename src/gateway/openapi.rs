//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateOrderRequest, ErrorResponse, UpdateStatusRequest};
use crate::models::{Order, OrderItem, OrderStatus, Product};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "In-memory order management over a fixed product catalog.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::product::list_products,
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::update_order_status,
        crate::gateway::handlers::order::delete_order,
    ),
    components(
        schemas(
            HealthResponse,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            CreateOrderRequest,
            UpdateStatusRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Catalog", description = "Read-only product catalog"),
        (name = "Orders", description = "Order creation, lookup, status changes and deletion"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Order Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_all_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths.paths;
        for path in [
            "/health",
            "/products",
            "/orders",
            "/orders/{id}",
            "/orders/{id}/status",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_order_schema_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.schemas.contains_key("Order"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
