//! Owner dashboard aggregation.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardCounts, OwnerDashboard};
use crate::repositories::BookingRepo;

/// Number of recent bookings shown on the dashboard.
const RECENT_LIMIT: i64 = 3;

/// Read-only aggregates for the owner console.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Assemble the full dashboard payload for one owner.
    ///
    /// Monthly revenue counts Confirmed and Completed bookings created in
    /// the current calendar month; Pending money is not revenue yet and
    /// Cancelled never is.
    pub async fn for_owner(pool: &PgPool, owner_id: &str) -> Result<OwnerDashboard, sqlx::Error> {
        let counts: DashboardCounts = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM cars WHERE owner_id = $1) AS total_cars,
                COUNT(*) AS total_bookings,
                COUNT(*) FILTER (WHERE status = 'Pending') AS pending_bookings,
                COUNT(*) FILTER (WHERE status = 'Completed') AS completed_bookings,
                COALESCE(SUM(total_cost) FILTER (
                    WHERE status IN ('Confirmed', 'Completed')
                      AND date_trunc('month', created_at) = date_trunc('month', NOW())
                ), 0)::BIGINT AS monthly_revenue
             FROM bookings
             WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        let recent = BookingRepo::recent_for_owner(pool, owner_id, RECENT_LIMIT).await?;

        Ok(OwnerDashboard {
            total_cars: counts.total_cars,
            total_bookings: counts.total_bookings,
            pending_bookings: counts.pending_bookings,
            completed_bookings: counts.completed_bookings,
            monthly_revenue: counts.monthly_revenue,
            recent_bookings: recent,
        })
    }
}
