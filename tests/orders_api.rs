//! End-to-end tests against the axum router, driven in-process.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use order_service::{AppState, build_router};

fn app() -> Router {
    build_router(Arc::new(AppState::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

async fn create(app: &Router, name: &str, product_id: u64, quantity: u64) -> Value {
    let (status, order) = send(
        app,
        Method::POST,
        "/orders",
        Some(json!({
            "customerName": name,
            "items": [{"productId": product_id, "quantity": quantity}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    order
}

#[tokio::test]
async fn lists_products_in_catalog_order() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "T-Shirt", "price": 19.99},
            {"id": 2, "name": "Jeans", "price": 49.99},
            {"id": 3, "name": "Sneakers", "price": 89.99}
        ])
    );
}

#[tokio::test]
async fn create_order_returns_201_with_total() {
    let app = app();
    let order = create(&app, "Al", 1, 2).await;

    assert_eq!(order["id"], 1);
    assert_eq!(order["customerName"], "Al");
    assert_eq!(order["items"], json!([{"productId": 1, "quantity": 2}]));
    assert_eq!(order["total"], json!(39.98));
    assert_eq!(order["status"], "pending");

    let created_at = order["createdAt"].as_str().expect("createdAt");
    assert!(created_at.ends_with('Z'));
    assert_eq!(created_at.len(), "2024-01-01T00:00:00.000Z".len());
}

#[tokio::test]
async fn ids_increase_and_are_never_reused() {
    let app = app();
    assert_eq!(create(&app, "a", 1, 1).await["id"], 1);
    assert_eq!(create(&app, "b", 2, 1).await["id"], 2);

    let (status, _) = send(&app, Method::DELETE, "/orders/2", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(create(&app, "c", 3, 1).await["id"], 3);
}

#[tokio::test]
async fn invalid_creates_return_400_and_store_nothing() {
    let app = app();
    let cases = [
        (
            json!({"items": [{"productId": 1, "quantity": 1}]}),
            "customerName and items are required",
        ),
        (
            json!({"customerName": "Al", "items": []}),
            "customerName and items are required",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 99, "quantity": 1}]}),
            "Invalid productId: 99",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 1, "quantity": 0}]}),
            "quantity must be > 0",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 1, "quantity": "Infinity"}]}),
            "quantity must be > 0",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 1, "quantity": -3}]}),
            "quantity must be > 0",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 1, "quantity": "0x10"}]}),
            "quantity must be > 0",
        ),
        (
            json!({"customerName": "Al", "items": {"productId": 1, "quantity": 1}}),
            "customerName and items are required",
        ),
        (
            json!({"customerName": "Al", "items": "1x T-Shirt"}),
            "customerName and items are required",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 3, "quantity": 1e28}]}),
            "order total is out of range",
        ),
        (
            json!({"customerName": "Al", "items": [{"productId": 3, "quantity": 1e30}]}),
            "quantity is out of range",
        ),
    ];

    for (body, message) in cases {
        let (status, error) = send(&app, Method::POST, "/orders", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, json!({ "error": message }));
    }

    let (_, orders) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn numeric_string_quantity_is_stored_as_number() {
    let app = app();
    let (status, order) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({"customerName": "Al", "items": [{"productId": 1, "quantity": "2"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["items"], json!([{"productId": 1, "quantity": 2}]));
    assert_eq!(order["total"], json!(39.98));
}

#[tokio::test]
async fn non_object_bodies_are_rejected() {
    let app = app();
    let (status, error) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!(["Al", [{"productId": 1, "quantity": 2}]])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().starts_with("Invalid JSON"));

    for body in [json!("Al"), json!(7)] {
        let (status, _) = send(&app, Method::POST, "/orders", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    let (_, orders) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(orders, json!([]));

    create(&app, "Al", 1, 1).await;
    let (status, error) = send(
        &app,
        Method::PATCH,
        "/orders/1/status",
        Some(json!(["shipped"])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().starts_with("Invalid JSON"));

    let (_, order) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(order["status"], "pending");
}

#[tokio::test]
async fn create_without_body_reports_missing_fields() {
    let app = app();
    let (status, error) = send(&app, Method::POST, "/orders", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "customerName and items are required");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"customerName\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn get_order_by_id() {
    let app = app();
    let created = create(&app, "Al", 3, 1).await;

    let (status, fetched) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    for uri in ["/orders/42", "/orders/abc", "/orders/0"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "Order not found"}));
    }
}

#[tokio::test]
async fn list_orders_in_creation_order() {
    let app = app();
    for name in ["a", "b", "c"] {
        create(&app, name, 1, 1).await;
    }
    let (status, orders) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["customerName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn update_status_is_unconditional() {
    let app = app();
    create(&app, "Al", 1, 2).await;

    for next in ["shipped", "delivered", "pending", "cancelled", "cancelled"] {
        let (status, order) = send(
            &app,
            Method::PATCH,
            "/orders/1/status",
            Some(json!({ "status": next })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(order["status"], next);
        assert_eq!(order["total"], json!(39.98));
    }
}

#[tokio::test]
async fn update_status_rejects_unknown_value() {
    let app = app();
    create(&app, "Al", 1, 1).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/orders/1/status",
        Some(json!({"status": "lost"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "status must be one of: pending, confirmed, shipped, delivered, cancelled"
    );

    let (status, body) = send(&app, Method::PATCH, "/orders/1/status", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "status must be one of: pending, confirmed, shipped, delivered, cancelled"
    );

    let (_, order) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(order["status"], "pending");
}

#[tokio::test]
async fn update_status_missing_order_is_404_even_with_bad_status() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/orders/7/status",
        Some(json!({"status": "lost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");

    create(&app, "Al", 1, 1).await;
    for uri in ["/orders/abc/status", "/orders/0/status", "/orders/1.5/status"] {
        let (status, body) = send(
            &app,
            Method::PATCH,
            uri,
            Some(json!({"status": "shipped"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Order not found");
    }
    let (_, order) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(order["status"], "pending");
}

#[tokio::test]
async fn delete_returns_snapshot_then_404() {
    let app = app();
    create(&app, "Al", 1, 2).await;
    let (_, shipped) = send(
        &app,
        Method::PATCH,
        "/orders/1/status",
        Some(json!({"status": "shipped"})),
    )
    .await;

    let (status, removed) = send(&app, Method::DELETE, "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, shipped);

    let (status, _) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn delete_with_unparsable_id_is_404() {
    let app = app();
    create(&app, "Al", 1, 1).await;
    for uri in ["/orders/abc", "/orders/-1", "/orders/0"] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "Order not found"}));
    }
    let (_, orders) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestampMs"].is_u64());

    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/orders/{id}/status"].is_object());
}
