//! Booking lifecycle routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Build the bookings router.
///
/// ```text
/// POST /check-availability  free cars over a window
/// POST /create              payment-verified booking (auth)
/// GET  /user                caller's bookings (auth)
/// GET  /owner               bookings on caller's cars (owner)
/// POST /change-status       state machine transition (owner)
/// POST /cancel              delete booking, free dates (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-availability", post(bookings::check_availability))
        .route("/create", post(bookings::create_booking))
        .route("/user", get(bookings::user_bookings))
        .route("/owner", get(bookings::owner_bookings))
        .route("/change-status", post(bookings::change_status))
        .route("/cancel", post(bookings::cancel_booking))
}
