use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use rentaride_core::error::CoreError;
use rentaride_core::roles;
use rentaride_db::models::user::{UpsertUser, User};
use rentaride_db::repositories::UserRepo;

use crate::auth::identity;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    pub new_role: String,
}

/// POST /users/login - verify an identity token and upsert the caller's
/// user row.
///
/// First login registers the account with the default role; later logins
/// refresh the profile fields but never touch the role.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    let claims = identity::verify_token(&input.token, &state.config.identity).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired token".to_string(),
        ))
    })?;

    let email = claims
        .email
        .ok_or_else(|| AppError::BadRequest("Identity token carries no email claim".to_string()))?;
    let display_name = claims.name.unwrap_or_else(|| email.clone());

    let user = UserRepo::upsert_from_login(
        &state.pool,
        &UpsertUser {
            id: claims.sub,
            email,
            display_name,
            image_url: claims.picture,
        },
    )
    .await?;

    Ok(Json(DataResponse::new(user)))
}

/// GET /users/me - the caller's user record.
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<User>>> {
    let record = UserRepo::find_by_id(&state.pool, &user.uid)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &user.uid)))?;

    Ok(Json(DataResponse::new(record)))
}

/// PUT /users/change-role/{uid} - set any user's role (admin only).
pub async fn change_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(uid): Path<String>,
    Json(input): Json<ChangeRoleRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    if !roles::is_valid_role(&input.new_role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role: {}. Valid roles: user, owner, admin",
            input.new_role
        ))));
    }

    let user = UserRepo::update_role(&state.pool, &uid, &input.new_role)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &uid)))?;

    Ok(Json(DataResponse::new(user)))
}
