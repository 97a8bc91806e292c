//! Shared booking-confirmation payload for the notification channels.

use rentaride_core::types::Day;

/// What the renter gets told after a successful booking.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub car_brand: String,
    pub car_model: String,
    pub pickup_date: Day,
    pub return_date: Day,
    /// Whole currency units.
    pub total_cost: i64,
}

impl BookingConfirmation {
    /// One-line summary used by the SMS channel.
    pub fn sms_body(&self) -> String {
        format!(
            "Your Rent-A-Ride booking is confirmed! {} {}, Pickup: {}, Return: {}. Total: ₹{}",
            self.car_brand, self.car_model, self.pickup_date, self.return_date, self.total_cost
        )
    }
}
