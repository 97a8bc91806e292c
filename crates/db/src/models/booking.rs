//! Booking entity model and DTOs.

use rentaride_core::availability::DateRange;
use rentaride_core::types::{Day, DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// Full booking row from the `bookings` table.
///
/// `status` holds a `BookingStatus::as_str` value; parse it back through
/// the core state machine before changing it.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: UserId,
    pub owner_id: Option<UserId>,
    pub pickup_date: Day,
    pub return_date: Day,
    pub total_days: i64,
    pub total_cost: i64,
    pub status: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub payment_order_id: Option<String>,
    pub created_at: Timestamp,
}

/// Input for the payment-verified booking commit.
///
/// `interval` has already passed rental validation and `total_days` /
/// `total_cost` come from the pricing quote, so the repository only has to
/// decide whether the car can take the reservation.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub car_id: DbId,
    pub user_id: UserId,
    pub interval: DateRange,
    pub total_days: i64,
    pub total_cost: i64,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub payment_order_id: String,
}

/// Booking joined with a snapshot of its car, for list endpoints and the
/// owner dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithCar {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: UserId,
    pub owner_id: Option<UserId>,
    pub pickup_date: Day,
    pub return_date: Day,
    pub total_days: i64,
    pub total_cost: i64,
    pub status: String,
    pub created_at: Timestamp,
    pub car_brand: String,
    pub car_model: String,
    pub car_year: i32,
    pub car_category: String,
    pub car_location: String,
    pub car_image_url: Option<String>,
}
