//! Repository for the `cars` table.

use rentaride_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{Car, CarFilters, CreateCar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, brand, model, year, price_per_day, category, transmission, \
                       fuel_type, seating_capacity, location, description, image_url, \
                       is_available, created_at, updated_at";

/// Provides CRUD operations for car listings.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new listing for `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateCar,
        image_url: Option<&str>,
    ) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (owner_id, brand, model, year, price_per_day, category,
                               transmission, fuel_type, seating_capacity, location,
                               description, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(owner_id)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.price_per_day)
            .bind(&input.category)
            .bind(&input.transmission)
            .bind(&input.fuel_type)
            .bind(input.seating_capacity)
            .bind(&input.location)
            .bind(&input.description)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a car by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Public search: listed cars matching the filters, newest first.
    ///
    /// Date-window filtering happens in the caller through the shared
    /// availability evaluator, never in SQL.
    pub async fn list_available(pool: &PgPool, filters: &CarFilters) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars
             WHERE is_available = TRUE
               AND ($1::text IS NULL OR location = $1)
               AND ($2::text IS NULL OR category = $2)
               AND ($3::text IS NULL OR transmission = $3)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&filters.location)
            .bind(&filters.category)
            .bind(&filters.transmission)
            .fetch_all(pool)
            .await
    }

    /// All of an owner's listings, including unlisted-from-search ones.
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Flip a car's search visibility.
    pub async fn toggle_availability(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET is_available = NOT is_available, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a listing: detach it from its owner and hide it from search.
    ///
    /// The row survives so existing bookings keep their reference.
    pub async fn unlist(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET owner_id = NULL, is_available = FALSE, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
