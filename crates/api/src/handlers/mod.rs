//! HTTP request handlers, grouped by resource.

pub mod bookings;
pub mod cars;
pub mod notifications;
pub mod owner;
pub mod payment;
pub mod users;
