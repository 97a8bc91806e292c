//! RentARide domain core.
//!
//! Pure domain logic with zero internal dependencies: date-range
//! availability, rental pricing, the booking status state machine, role
//! constants, and the shared error taxonomy. Everything here is I/O-free so
//! it can be used by the repository layer, the API handlers, and any future
//! CLI tooling alike.

pub mod availability;
pub mod error;
pub mod pricing;
pub mod roles;
pub mod status;
pub mod types;
