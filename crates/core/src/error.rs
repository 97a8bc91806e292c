//! Shared domain error taxonomy.
//!
//! Every failure the API can surface maps to one of these variants; the API
//! crate converts them to HTTP statuses and stable machine-readable codes.

use crate::status::BookingStatus;

/// Domain-level error type used across all crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed. `id` is stringly typed because user ids are
    /// provider subjects (TEXT) while cars/bookings use numeric ids.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Malformed or rejected input (bad dates, unknown role, empty field).
    #[error("{0}")]
    Validation(String),

    /// The requested write conflicts with existing state (date overlap,
    /// duplicate resource).
    #[error("{0}")]
    Conflict(String),

    /// A booking status change not allowed by the state machine.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Valid credentials, insufficient role.
    #[error("{0}")]
    Forbidden(String),

    /// The payment order backing a booking could not be confirmed as paid.
    #[error("Payment not confirmed: {0}")]
    PaymentNotConfirmed(String),

    /// An external collaborator (payment gateway, mail relay, SMS, CDN)
    /// failed or timed out.
    #[error("{service} failed: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// An unexpected internal failure. The message is logged server-side
    /// and never sent to clients verbatim.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] over a numeric id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
