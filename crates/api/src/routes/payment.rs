//! Payment gateway routes.

use axum::routing::post;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Build the payment router.
///
/// ```text
/// POST /create-order  gateway order for checkout
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create-order", post(payment::create_order))
}
