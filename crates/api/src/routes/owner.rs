//! Listing management routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::owner;
use crate::state::AppState;

/// Build the owner router.
///
/// ```text
/// POST /change-role   self-promote to owner (auth)
/// POST /add-car       create listing (owner)
/// GET  /cars          caller's listings (owner)
/// POST /toggle-car    flip search visibility (owner)
/// POST /delete-car    unlist a car (owner)
/// POST /block-dates   block maintenance dates (owner)
/// GET  /dashboard     aggregates + recent bookings (owner)
/// POST /update-image  avatar upload (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/change-role", post(owner::change_role_to_owner))
        .route("/add-car", post(owner::add_car))
        .route("/cars", get(owner::owner_cars))
        .route("/toggle-car", post(owner::toggle_car))
        .route("/delete-car", post(owner::delete_car))
        .route("/block-dates", post(owner::block_dates))
        .route("/dashboard", get(owner::dashboard))
        .route("/update-image", post(owner::update_image))
}
