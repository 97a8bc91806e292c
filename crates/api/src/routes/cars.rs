//! Public car routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Build the cars router.
///
/// ```text
/// GET /        search listed cars (filters + optional date window)
/// GET /{id}    car detail with blocked dates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list_cars))
        .route("/{id}", get(cars::get_car))
}
