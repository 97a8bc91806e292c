//! Repository for the `car_commitments` table.

use std::collections::HashMap;

use rentaride_core::availability::{is_available, DateRange};
use rentaride_core::types::{Day, DbId};
use sqlx::PgPool;

use crate::models::commitment::CarCommitment;
use crate::repositories::ReserveError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, car_id, booking_id, start_date, end_date, created_at";

/// Provides access to committed date ranges.
pub struct CommitmentRepo;

impl CommitmentRepo {
    /// All commitments for one car, ordered by start date.
    pub async fn list_for_car(
        pool: &PgPool,
        car_id: DbId,
    ) -> Result<Vec<CarCommitment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM car_commitments WHERE car_id = $1 ORDER BY start_date"
        );
        sqlx::query_as::<_, CarCommitment>(&query)
            .bind(car_id)
            .fetch_all(pool)
            .await
    }

    /// Committed ranges for a set of cars, grouped by car.
    ///
    /// One query regardless of how many cars the search returned.
    pub async fn ranges_by_car(
        pool: &PgPool,
        car_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<DateRange>>, sqlx::Error> {
        if car_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(DbId, Day, Day)> = sqlx::query_as(
            "SELECT car_id, start_date, end_date FROM car_commitments WHERE car_id = ANY($1)",
        )
        .bind(car_ids)
        .fetch_all(pool)
        .await?;

        let mut by_car: HashMap<DbId, Vec<DateRange>> = HashMap::new();
        for (car_id, start, end) in rows {
            by_car
                .entry(car_id)
                .or_default()
                .push(DateRange { start, end });
        }
        Ok(by_car)
    }

    /// Owner block: insert already-normalized ranges for a car.
    ///
    /// Same locking discipline as the booking commit: the car row lock
    /// serializes commitment writes, and each range is re-checked against
    /// what is committed before it goes in. `booking_id` stays NULL so the
    /// block is distinguishable from a booking hold.
    pub async fn block_dates(
        pool: &PgPool,
        car_id: DbId,
        ranges: &[DateRange],
    ) -> Result<Vec<CarCommitment>, ReserveError> {
        let mut tx = pool.begin().await?;

        let car: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM cars WHERE id = $1 FOR UPDATE")
                .bind(car_id)
                .fetch_optional(&mut *tx)
                .await?;
        if car.is_none() {
            return Err(ReserveError::CarNotFound(car_id));
        }

        let mut committed: Vec<DateRange> = sqlx::query_as::<_, (Day, Day)>(
            "SELECT start_date, end_date FROM car_commitments WHERE car_id = $1",
        )
        .bind(car_id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|(start, end)| DateRange { start, end })
        .collect();

        let insert = format!(
            "INSERT INTO car_commitments (car_id, start_date, end_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(ranges.len());
        for range in ranges {
            if !is_available(&committed, range) {
                return Err(ReserveError::Overlap(car_id));
            }
            let row = sqlx::query_as::<_, CarCommitment>(&insert)
                .bind(car_id)
                .bind(range.start)
                .bind(range.end)
                .fetch_one(&mut *tx)
                .await?;
            committed.push(*range);
            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }
}
