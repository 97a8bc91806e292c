//! Checkout order creation against the payment gateway.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, build_test_app_with_payments, post_json, StaticGateway};

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_happy_path(pool: PgPool) {
    let gateway = StaticGateway::new();
    let app = build_test_app_with_payments(pool, Arc::new(gateway));

    let response = post_json(app, "/api/payment/create-order", json!({ "amount": 450000 })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"]["id"].as_str().unwrap().starts_with("order_"));
    assert_eq!(json["data"]["amount"], 450000);
    assert_eq!(json["data"]["currency"], "INR");
    assert_eq!(json["data"]["keyId"], "rzp_test_static");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_with_explicit_currency(pool: PgPool) {
    let gateway = StaticGateway::new();
    let app = build_test_app_with_payments(pool, Arc::new(gateway));

    let response = post_json(
        app,
        "/api/payment/create-order",
        json!({ "amount": 1000, "currency": "USD" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["currency"], "USD");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_rejects_non_positive_amount(pool: PgPool) {
    let gateway = StaticGateway::new();
    let app = build_test_app_with_payments(pool, Arc::new(gateway));

    let response = post_json(app, "/api/payment/create-order", json!({ "amount": 0 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Order amount must be positive");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_without_configured_gateway(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/payment/create-order", json!({ "amount": 1000 })).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert_eq!(json["message"], "Payment gateway is not configured");
}
