//! Booking status state machine.
//!
//! Every status change goes through [`validate_transition`]; there is no
//! free-form status write anywhere else in the system. The wire format is
//! the capitalized variant name (`"Pending"`, `"Confirmed"`, ...), matching
//! the CHECK constraint on `bookings.status`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle state of a booking.
///
/// Allowed transitions:
///
/// ```text
/// Pending   -> Confirmed | Cancelled
/// Confirmed -> Completed | Cancelled
/// Cancelled -> (terminal)
/// Completed -> (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Canonical wire string, matching the `bookings.status` CHECK values.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Parse a status string, case-insensitively.
    ///
    /// Accepts `"confirmed"`, `"Confirmed"`, `"CONFIRMED"` and so on;
    /// anything else is a validation error.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(CoreError::Validation(format!(
                "Unknown booking status: {value}"
            ))),
        }
    }

    /// Statuses reachable from `self` in one step.
    pub fn valid_transitions(&self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
            BookingStatus::Confirmed => &[BookingStatus::Completed, BookingStatus::Cancelled],
            BookingStatus::Cancelled => &[],
            BookingStatus::Completed => &[],
        }
    }

    /// Whether `self -> to` is an allowed transition.
    pub fn can_transition(&self, to: BookingStatus) -> bool {
        self.valid_transitions().contains(&to)
    }

    /// No further transitions are possible from a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a requested status change, returning the error callers surface
/// as a conflict.
pub fn validate_transition(from: BookingStatus, to: BookingStatus) -> Result<(), CoreError> {
    if from.can_transition(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    // -----------------------------------------------------------------------
    // Allowed transitions
    // -----------------------------------------------------------------------

    #[test]
    fn pending_can_confirm() {
        assert!(validate_transition(Pending, Confirmed).is_ok());
    }

    #[test]
    fn pending_can_cancel() {
        assert!(validate_transition(Pending, Cancelled).is_ok());
    }

    #[test]
    fn confirmed_can_complete() {
        assert!(validate_transition(Confirmed, Completed).is_ok());
    }

    #[test]
    fn confirmed_can_cancel() {
        assert!(validate_transition(Confirmed, Cancelled).is_ok());
    }

    // -----------------------------------------------------------------------
    // Rejected transitions
    // -----------------------------------------------------------------------

    #[test]
    fn pending_cannot_complete_directly() {
        let err = validate_transition(Pending, Completed).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: Pending,
                to: Completed
            }
        ));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(Cancelled.is_terminal());
        assert!(validate_transition(Cancelled, Pending).is_err());
        assert!(validate_transition(Cancelled, Confirmed).is_err());
        assert!(validate_transition(Cancelled, Completed).is_err());
    }

    #[test]
    fn completed_is_terminal() {
        assert!(Completed.is_terminal());
        assert!(validate_transition(Completed, Pending).is_err());
        assert!(validate_transition(Completed, Confirmed).is_err());
        assert!(validate_transition(Completed, Cancelled).is_err());
    }

    #[test]
    fn no_self_transitions() {
        for status in [Pending, Confirmed, Cancelled, Completed] {
            assert!(
                !status.can_transition(status),
                "{status} should not transition to itself"
            );
        }
    }

    #[test]
    fn confirmed_cannot_revert_to_pending() {
        assert!(validate_transition(Confirmed, Pending).is_err());
    }

    // -----------------------------------------------------------------------
    // Wire format
    // -----------------------------------------------------------------------

    #[test]
    fn as_str_is_capitalized() {
        assert_eq!(Pending.as_str(), "Pending");
        assert_eq!(Confirmed.as_str(), "Confirmed");
        assert_eq!(Cancelled.as_str(), "Cancelled");
        assert_eq!(Completed.as_str(), "Completed");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(BookingStatus::parse("pending").unwrap(), Pending);
        assert_eq!(BookingStatus::parse("Confirmed").unwrap(), Confirmed);
        assert_eq!(BookingStatus::parse("CANCELLED").unwrap(), Cancelled);
        assert_eq!(BookingStatus::parse("cOmPlEtEd").unwrap(), Completed);
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert!(BookingStatus::parse("archived").is_err());
        assert!(BookingStatus::parse("").is_err());
    }

    #[test]
    fn serde_round_trips_capitalized() {
        let json = serde_json::to_string(&Confirmed).unwrap();
        assert_eq!(json, "\"Confirmed\"");
        let back: BookingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Confirmed);
    }
}
