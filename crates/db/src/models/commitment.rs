//! Car commitment rows: normalized unavailable date ranges.

use rentaride_core::availability::DateRange;
use rentaride_core::types::{Day, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One committed closed date range for a car.
///
/// `booking_id` is `Some` for booking holds and `None` for owner-entered
/// maintenance blocks.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CarCommitment {
    pub id: DbId,
    pub car_id: DbId,
    pub booking_id: Option<DbId>,
    pub start_date: Day,
    pub end_date: Day,
    pub created_at: Timestamp,
}

impl CarCommitment {
    /// View of this row as the core interval type.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}
