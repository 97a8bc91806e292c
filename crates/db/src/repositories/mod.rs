//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Reservation writes that
//! need the car-lock-then-check dance return [`ReserveError`] instead of
//! bare `sqlx::Error`.

use rentaride_core::types::DbId;

pub mod booking_repo;
pub mod car_repo;
pub mod commitment_repo;
pub mod dashboard_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use car_repo::CarRepo;
pub use commitment_repo::CommitmentRepo;
pub use dashboard_repo::DashboardRepo;
pub use user_repo::UserRepo;

/// Failure modes of the guarded reservation writes.
///
/// The three domain variants come out of the locked availability check;
/// anything the database itself rejects surfaces as `Db`.
#[derive(Debug, thiserror::Error)]
pub enum ReserveError {
    #[error("Car with id {0} not found")]
    CarNotFound(DbId),
    #[error("Car {0} is not listed for rental")]
    CarNotAvailable(DbId),
    #[error("Car {0} is already committed for the requested dates")]
    Overlap(DbId),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
