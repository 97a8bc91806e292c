//! User entity model and DTOs.

use rentaride_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// `id` is the identity provider's subject claim, not a generated key.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    /// One of `"user"`, `"owner"`, `"admin"`.
    pub role: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity attributes extracted from a verified login token.
///
/// Used by the login upsert; the role column is never touched here.
#[derive(Debug, Clone)]
pub struct UpsertUser {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub image_url: Option<String>,
}
