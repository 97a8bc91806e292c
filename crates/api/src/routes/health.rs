//! Health check route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Build the health router. Merged at the root level, NOT under `/api`,
/// so load balancers can probe it without a prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health - liveness probe with a database connectivity check.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = rentaride_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
