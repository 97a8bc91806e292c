//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{UpsertUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, display_name, role, image_url, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert-or-refresh a user from a verified login.
    ///
    /// First login creates the row with the default `user` role; later
    /// logins refresh the identity attributes and leave `role` alone.
    pub async fn upsert_from_login(pool: &PgPool, input: &UpsertUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, display_name, image_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                image_url = COALESCE(EXCLUDED.image_url, users.image_url),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.id)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a user by provider subject.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set a user's role. The caller validates the role string first.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_role(
        pool: &PgPool,
        id: &str,
        role: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET role = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// Replace a user's profile image URL.
    pub async fn update_image(
        pool: &PgPool,
        id: &str,
        image_url: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET image_url = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }
}
