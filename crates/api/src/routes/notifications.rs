//! Notification routes.

use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Build the notifications router.
///
/// ```text
/// POST /send  booking confirmation email + SMS
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/send", post(notifications::send))
}
