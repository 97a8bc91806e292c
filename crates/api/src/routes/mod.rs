//! Route registration.
//!
//! Full route tree (health sits at the root, everything else under
//! `/api`):
//!
//! ```text
//! GET  /health                          liveness + db check + version
//!
//! POST /api/users/login                 verify identity token, upsert user
//! GET  /api/users/me                    caller's record            (auth)
//! PUT  /api/users/change-role/{uid}     set a user's role          (admin)
//!
//! GET  /api/cars                        public search with filters
//! GET  /api/cars/{id}                   detail with blocked dates
//!
//! POST /api/bookings/check-availability free cars over a window
//! POST /api/bookings/create             payment-verified booking   (auth)
//! GET  /api/bookings/user               caller's bookings          (auth)
//! GET  /api/bookings/owner              bookings on caller's cars  (owner)
//! POST /api/bookings/change-status      state machine transition   (owner)
//! POST /api/bookings/cancel             delete booking, free dates (owner)
//!
//! POST /api/owner/change-role           self-promote to owner      (auth)
//! POST /api/owner/add-car               create listing             (owner)
//! GET  /api/owner/cars                  caller's listings          (owner)
//! POST /api/owner/toggle-car            flip search visibility     (owner)
//! POST /api/owner/delete-car            unlist a car               (owner)
//! POST /api/owner/block-dates           block maintenance dates    (owner)
//! GET  /api/owner/dashboard             aggregates + recent        (owner)
//! POST /api/owner/update-image          avatar upload              (auth)
//!
//! POST /api/payment/create-order        gateway order for checkout
//! POST /api/notifications/send          confirmation email + SMS
//! ```

pub mod bookings;
pub mod cars;
pub mod health;
pub mod notifications;
pub mod owner;
pub mod payment;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts: login, profile, admin role management
        .nest("/users", users::router())
        // Public car search and detail
        .nest("/cars", cars::router())
        // Availability checks and the booking lifecycle
        .nest("/bookings", bookings::router())
        // Listing management and the owner dashboard
        .nest("/owner", owner::router())
        // Payment gateway orders
        .nest("/payment", payment::router())
        // Booking confirmations over email and SMS
        .nest("/notifications", notifications::router())
}
