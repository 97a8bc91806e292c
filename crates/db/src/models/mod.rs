//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and patches
//!
//! Everything serialized to the API uses camelCase field names.

pub mod booking;
pub mod car;
pub mod commitment;
pub mod dashboard;
pub mod user;
