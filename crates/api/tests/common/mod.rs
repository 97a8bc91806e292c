//! Shared test utilities: app construction, tokens, request helpers.

#![allow(dead_code)] // not every test binary uses every helper

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use rentaride_api::auth::identity::{self, IdentityConfig};
use rentaride_api::config::ServerConfig;
use rentaride_api::routes;
use rentaride_api::state::AppState;
use rentaride_db::models::car::{Car, CreateCar};
use rentaride_db::models::user::UpsertUser;
use rentaride_db::repositories::{CarRepo, UserRepo};
use rentaride_gateways::{PaymentError, PaymentGateway, PaymentOrder, UnconfiguredGateway};

/// Server config for tests; no environment variables required.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        identity: IdentityConfig {
            secret: "test-identity-secret-shared-with-the-app".to_string(),
            token_expiry_mins: 15,
        },
    }
}

/// Build the application router backed by `pool`, mirroring main.rs but
/// with an unconfigured payment gateway and no delivery channels.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_payments(pool, Arc::new(UnconfiguredGateway))
}

/// Like [`build_test_app`] with a caller-supplied payment gateway.
pub fn build_test_app_with_payments(pool: PgPool, payments: Arc<dyn PaymentGateway>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        payments,
        email: None,
        sms: None,
        media: None,
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors(&config))
        .with_state(state)
}

fn build_cors(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| o.parse().unwrap())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

// ---------------------------------------------------------------------------
// Payment gateway double
// ---------------------------------------------------------------------------

/// In-memory payment gateway. Orders registered via [`add_order`] can be
/// fetched back; unknown ids get a gateway-side 404.
///
/// [`add_order`]: StaticGateway::add_order
#[derive(Clone, Default)]
pub struct StaticGateway {
    orders: Arc<Mutex<HashMap<String, PaymentOrder>>>,
}

impl StaticGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order(&self, order: PaymentOrder) {
        self.orders.lock().unwrap().insert(order.id.clone(), order);
    }

    /// A paid order worth `amount` minor units.
    pub fn paid_order(id: &str, amount: i64) -> PaymentOrder {
        PaymentOrder {
            id: id.to_string(),
            amount,
            currency: "INR".to_string(),
            status: "paid".to_string(),
        }
    }

    /// An order the customer has not paid yet.
    pub fn unpaid_order(id: &str, amount: i64) -> PaymentOrder {
        PaymentOrder {
            id: id.to_string(),
            amount,
            currency: "INR".to_string(),
            status: "created".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StaticGateway {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, PaymentError> {
        let order = PaymentOrder {
            id: format!("order_{receipt}"),
            amount: amount_minor,
            currency: currency.to_string(),
            status: "created".to_string(),
        };
        self.add_order(order.clone());
        Ok(order)
    }

    async fn fetch_order(&self, order_id: &str) -> Result<PaymentOrder, PaymentError> {
        self.orders
            .lock()
            .unwrap()
            .get(order_id)
            .cloned()
            .ok_or(PaymentError::HttpStatus(404))
    }

    fn key_id(&self) -> &str {
        "rzp_test_static"
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Mint an identity token for `uid` signed with the test secret.
pub fn auth_token(uid: &str) -> String {
    identity::issue_token(
        uid,
        Some(&format!("{uid}@example.com")),
        Some(uid),
        &test_config().identity,
    )
    .unwrap()
}

/// Insert a user row with the given role and return a token for it.
pub async fn seed_user(pool: &PgPool, uid: &str, role: &str) -> String {
    UserRepo::upsert_from_login(
        pool,
        &UpsertUser {
            id: uid.to_string(),
            email: format!("{uid}@example.com"),
            display_name: uid.to_string(),
            image_url: None,
        },
    )
    .await
    .unwrap();
    if role != "user" {
        UserRepo::update_role(pool, uid, role).await.unwrap();
    }
    auth_token(uid)
}

pub async fn seed_car(pool: &PgPool, owner_id: &str, location: &str, price_per_day: i64) -> Car {
    CarRepo::create(
        pool,
        owner_id,
        &CreateCar {
            brand: "Honda".to_string(),
            model: "City".to_string(),
            year: 2022,
            price_per_day,
            category: "Sedan".to_string(),
            transmission: "Manual".to_string(),
            fuel_type: "Petrol".to_string(),
            seating_capacity: 5,
            location: location.to_string(),
            description: None,
        },
        None,
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
