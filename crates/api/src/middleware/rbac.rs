//! Role-gate extractors layered over [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rentaride_core::error::CoreError;
use rentaride_core::roles::{ROLE_ADMIN, ROLE_OWNER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires any authenticated user.
///
/// ```ignore
/// async fn me(RequireAuth(user): RequireAuth) -> AppResult<...> {
///     // user.uid is a registered user
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}

/// Requires the `owner` role. Admins pass too, so support staff can
/// manage listings on an owner's behalf.
///
/// ```ignore
/// async fn add_car(RequireOwner(user): RequireOwner) -> AppResult<...> {
///     // user.role is "owner" or "admin"
/// }
/// ```
pub struct RequireOwner(pub AuthUser);

impl FromRequestParts<AppState> for RequireOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_OWNER && user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Owner access required".to_string(),
            )));
        }
        Ok(RequireOwner(user))
    }
}

/// Requires the `admin` role.
///
/// ```ignore
/// async fn change_role(RequireAdmin(user): RequireAdmin) -> AppResult<...> {
///     // user.role is "admin"
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".to_string(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
