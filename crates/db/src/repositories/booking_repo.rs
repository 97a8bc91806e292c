//! Repository for the `bookings` table, including the guarded
//! reservation commit.

use rentaride_core::availability::{is_available, DateRange};
use rentaride_core::status::BookingStatus;
use rentaride_core::types::{Day, DbId};
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingWithCar, CreateBooking};
use crate::repositories::ReserveError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, car_id, user_id, owner_id, pickup_date, return_date, total_days, \
                       total_cost, status, contact_email, contact_phone, payment_order_id, \
                       created_at";

/// Booking columns joined with the car snapshot used by list endpoints.
const WITH_CAR_COLUMNS: &str =
    "b.id, b.car_id, b.user_id, b.owner_id, b.pickup_date, b.return_date, b.total_days, \
     b.total_cost, b.status, b.created_at, \
     c.brand AS car_brand, c.model AS car_model, c.year AS car_year, \
     c.category AS car_category, c.location AS car_location, c.image_url AS car_image_url";

/// Provides booking persistence and the transactional reservation flow.
pub struct BookingRepo;

impl BookingRepo {
    /// Commit a payment-verified booking.
    ///
    /// One transaction: lock the car row (serializing all commitment writes
    /// for that car), re-check the availability flag and committed ranges,
    /// then insert the booking as Confirmed together with its commitment
    /// row. Of any set of concurrent overlapping attempts, at most one can
    /// reach the commit.
    pub async fn create_confirmed(
        pool: &PgPool,
        input: &CreateBooking,
    ) -> Result<Booking, ReserveError> {
        let mut tx = pool.begin().await?;

        let car: Option<(Option<String>, bool)> =
            sqlx::query_as("SELECT owner_id, is_available FROM cars WHERE id = $1 FOR UPDATE")
                .bind(input.car_id)
                .fetch_optional(&mut *tx)
                .await?;
        let (car_owner, car_available) = match car {
            Some(row) => row,
            None => return Err(ReserveError::CarNotFound(input.car_id)),
        };
        if !car_available {
            return Err(ReserveError::CarNotAvailable(input.car_id));
        }

        let committed: Vec<DateRange> = sqlx::query_as::<_, (Day, Day)>(
            "SELECT start_date, end_date FROM car_commitments WHERE car_id = $1",
        )
        .bind(input.car_id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|(start, end)| DateRange { start, end })
        .collect();

        if !is_available(&committed, &input.interval) {
            return Err(ReserveError::Overlap(input.car_id));
        }

        let insert = format!(
            "INSERT INTO bookings (car_id, user_id, owner_id, pickup_date, return_date,
                                   total_days, total_cost, status, contact_email,
                                   contact_phone, payment_order_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&insert)
            .bind(input.car_id)
            .bind(&input.user_id)
            .bind(&car_owner)
            .bind(input.interval.start)
            .bind(input.interval.end)
            .bind(input.total_days)
            .bind(input.total_cost)
            .bind(BookingStatus::Confirmed.as_str())
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.payment_order_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO car_commitments (car_id, booking_id, start_date, end_date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(input.car_id)
        .bind(booking.id)
        .bind(input.interval.start)
        .bind(input.interval.end)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(booking)
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A renter's bookings with car snapshots, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<BookingWithCar>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_CAR_COLUMNS} FROM bookings b
             JOIN cars c ON c.id = b.car_id
             WHERE b.user_id = $1
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BookingWithCar>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Bookings on an owner's cars, newest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Vec<BookingWithCar>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_CAR_COLUMNS} FROM bookings b
             JOIN cars c ON c.id = b.car_id
             WHERE b.owner_id = $1
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BookingWithCar>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// The owner's most recent bookings, for the dashboard.
    pub async fn recent_for_owner(
        pool: &PgPool,
        owner_id: &str,
        limit: i64,
    ) -> Result<Vec<BookingWithCar>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_CAR_COLUMNS} FROM bookings b
             JOIN cars c ON c.id = b.car_id
             WHERE b.owner_id = $1
             ORDER BY b.created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, BookingWithCar>(&query)
            .bind(owner_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Write an already-validated status transition.
    ///
    /// Moving to Cancelled also frees the booking's commitment row in the
    /// same transaction, so confirmed bookings and commitments never drift
    /// apart.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Booking, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        if status == BookingStatus::Cancelled {
            sqlx::query("DELETE FROM car_commitments WHERE booking_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(booking)
    }

    /// Delete a booking and free exactly its committed range.
    ///
    /// Returns `false` if the booking no longer exists.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM car_commitments WHERE booking_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted.rows_affected() > 0)
    }
}
