use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rentaride_core::error::CoreError;
use rentaride_db::repositories::UserRepo;

use crate::auth::identity;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, extracted from a Bearer identity token.
///
/// The token only proves who the caller is; the role is loaded from the
/// `users` row on every request so a role change takes effect
/// immediately, not at the next token refresh.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity-provider subject, the primary key of `users`.
    pub uid: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".to_string(),
                ))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".to_string(),
            ))
        })?;

        let claims = identity::verify_token(token, &state.config.identity).map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired token".to_string(),
            ))
        })?;

        let user = UserRepo::find_by_id(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "User record not found, complete login first".to_string(),
                ))
            })?;

        Ok(AuthUser {
            uid: user.id,
            role: user.role,
        })
    }
}
