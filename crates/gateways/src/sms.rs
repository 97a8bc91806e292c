//! Booking confirmation SMS via the Twilio messages API.
//!
//! A single form-encoded POST per message with a bounded timeout. Sends are
//! not idempotent, so a failed attempt is reported rather than retried.

use std::time::Duration;

use crate::confirmation::BookingConfirmation;

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default messages API base URL.
const DEFAULT_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Country prefix assumed for bare local numbers.
const DEFAULT_COUNTRY_PREFIX: &str = "+91";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for SMS delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The SMS provider returned a non-2xx status code.
    #[error("SMS provider returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// SmsConfig
// ---------------------------------------------------------------------------

/// Configuration for the SMS delivery service.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Provider account SID, also the basic-auth username.
    pub account_sid: String,
    /// Auth token, the basic-auth password.
    pub auth_token: String,
    /// E.164 sender number.
    pub from_number: String,
    /// Messages API base URL.
    pub api_base: String,
}

impl SmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if any credential is missing, signalling that SMS
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable             | Required | Default                              |
    /// |----------------------|----------|--------------------------------------|
    /// | `TWILIO_ACCOUNT_SID` | yes      | —                                    |
    /// | `TWILIO_AUTH_TOKEN`  | yes      | —                                    |
    /// | `TWILIO_FROM_NUMBER` | yes      | —                                    |
    /// | `TWILIO_API_BASE`    | no       | `https://api.twilio.com/2010-04-01`  |
    pub fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok()?;
        let from_number = std::env::var("TWILIO_FROM_NUMBER").ok()?;
        Some(Self {
            account_sid,
            auth_token,
            from_number,
            api_base: std::env::var("TWILIO_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// SmsDelivery
// ---------------------------------------------------------------------------

/// Sends booking confirmation texts.
pub struct SmsDelivery {
    config: SmsConfig,
    client: reqwest::Client,
}

impl SmsDelivery {
    /// Create a new SMS delivery service with the given configuration.
    pub fn new(config: SmsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { config, client }
    }

    /// Normalize a recipient number to E.164.
    ///
    /// Numbers without a leading `+` get the default country prefix, which
    /// is how the mobile clients have always submitted them.
    fn normalize_number(number: &str) -> String {
        if number.starts_with('+') {
            number.to_string()
        } else {
            format!("{DEFAULT_COUNTRY_PREFIX}{number}")
        }
    }

    /// Send a booking confirmation text to the given number.
    pub async fn send_confirmation(
        &self,
        to_number: &str,
        confirmation: &BookingConfirmation,
    ) -> Result<(), SmsError> {
        let to = Self::normalize_number(to_number);
        let body = confirmation.sms_body();
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            self.config.api_base, self.config.account_sid
        );
        let params = [
            ("To", to.as_str()),
            ("From", self.config.from_number.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SmsError::HttpStatus(response.status().as_u16()));
        }

        tracing::info!(to = %to, "Booking confirmation SMS sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
