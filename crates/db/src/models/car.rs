//! Car entity model and DTOs.

use rentaride_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full car row from the `cars` table.
///
/// `owner_id` is `None` once a listing is removed; the row itself stays so
/// that past bookings keep a valid car reference.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: DbId,
    pub owner_id: Option<UserId>,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Rate in whole currency units.
    pub price_per_day: i64,
    pub category: String,
    pub transmission: String,
    pub fuel_type: String,
    pub seating_capacity: i32,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for listing a new car.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: i64,
    pub category: String,
    pub transmission: String,
    pub fuel_type: String,
    pub seating_capacity: i32,
    pub location: String,
    pub description: Option<String>,
}

/// Column filters for the public car search. The date window is applied
/// by the caller through the availability evaluator, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFilters {
    pub location: Option<String>,
    pub category: Option<String>,
    pub transmission: Option<String>,
}
