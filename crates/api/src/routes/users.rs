//! Account routes.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Build the users router.
///
/// ```text
/// POST /login              verify identity token, upsert user
/// GET  /me                 caller's record (auth)
/// PUT  /change-role/{uid}  set a user's role (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(users::login))
        .route("/me", get(users::me))
        .route("/change-role/{uid}", put(users::change_role))
}
