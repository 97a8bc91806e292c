//! Outbound integrations: payment orders, email, SMS, and image hosting.
//!
//! Every channel follows the same pattern: a `*Config::from_env` that
//! returns `None` when the channel is not configured, and a client owning
//! a pre-built HTTP transport with a bounded timeout. A missing channel is
//! skipped at runtime; it never aborts startup.

pub mod confirmation;
pub mod email;
pub mod media;
pub mod payment;
pub mod sms;

pub use confirmation::BookingConfirmation;
pub use email::{EmailConfig, EmailDelivery};
pub use media::{MediaClient, MediaConfig};
pub use payment::{
    PaymentConfig, PaymentError, PaymentGateway, PaymentOrder, RazorpayClient, UnconfiguredGateway,
};
pub use sms::{SmsConfig, SmsDelivery};
