//! Owner dashboard aggregates.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::booking::BookingWithCar;

/// Single-row aggregate counters for one owner.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCounts {
    pub total_cars: i64,
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub completed_bookings: i64,
    /// Sum of `total_cost` over revenue-bearing bookings (Confirmed or
    /// Completed) created in the current calendar month.
    pub monthly_revenue: i64,
}

/// Full dashboard payload for the owner console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    pub total_cars: i64,
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub completed_bookings: i64,
    pub monthly_revenue: i64,
    pub recent_bookings: Vec<BookingWithCar>,
}
