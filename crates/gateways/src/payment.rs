//! Payment order gateway.
//!
//! [`PaymentGateway`] abstracts the two order operations the booking flow
//! needs; [`RazorpayClient`] is the HTTP implementation against the vendor
//! orders API. `fetch_order` is an idempotent read and retries with
//! exponential backoff (1 s, 2 s, 4 s); `create_order` is never retried,
//! since a replay could mint a duplicate order.

use std::time::Duration;

use serde::Deserialize;

/// Retry delays for idempotent reads (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single gateway call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default orders API base URL.
const DEFAULT_API_BASE: &str = "https://api.razorpay.com/v1";

/// Order status reported by the gateway once the money is captured.
pub const STATUS_PAID: &str = "paid";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for payment gateway failures.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Payment gateway returned HTTP {0}")]
    HttpStatus(u16),

    /// The gateway credentials are not present in the environment.
    #[error("Payment gateway is not configured")]
    NotConfigured,
}

// ---------------------------------------------------------------------------
// PaymentOrder
// ---------------------------------------------------------------------------

/// Gateway-side order descriptor.
///
/// Unknown response fields are ignored; only what the booking flow reads
/// is modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    /// Amount in minor currency units (paise).
    pub amount: i64,
    pub currency: String,
    /// `created`, `attempted`, or `paid`.
    pub status: String,
}

impl PaymentOrder {
    /// Whether the gateway has captured the money for this order.
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }
}

// ---------------------------------------------------------------------------
// PaymentGateway
// ---------------------------------------------------------------------------

/// The two order operations the booking flow needs.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order for `amount_minor` (minor units) tagged with a
    /// client receipt reference.
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, PaymentError>;

    /// Fetch an existing order by its gateway id. Idempotent.
    async fn fetch_order(&self, order_id: &str) -> Result<PaymentOrder, PaymentError>;

    /// Public key id the browser checkout widget needs.
    fn key_id(&self) -> &str;
}

// ---------------------------------------------------------------------------
// PaymentConfig
// ---------------------------------------------------------------------------

/// Credentials and endpoint for the payment gateway.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Public key id, also handed to the browser.
    pub key_id: String,
    /// Secret half of the basic-auth pair.
    pub key_secret: String,
    /// Orders API base URL.
    pub api_base: String,
}

impl PaymentConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `RAZORPAY_KEY_ID` or `RAZORPAY_KEY_SECRET` is not
    /// set, signalling that payments are not configured.
    ///
    /// | Variable              | Required | Default                       |
    /// |-----------------------|----------|-------------------------------|
    /// | `RAZORPAY_KEY_ID`     | yes      | —                             |
    /// | `RAZORPAY_KEY_SECRET` | yes      | —                             |
    /// | `RAZORPAY_API_BASE`   | no       | `https://api.razorpay.com/v1` |
    pub fn from_env() -> Option<Self> {
        let key_id = std::env::var("RAZORPAY_KEY_ID").ok()?;
        let key_secret = std::env::var("RAZORPAY_KEY_SECRET").ok()?;
        Some(Self {
            key_id,
            key_secret,
            api_base: std::env::var("RAZORPAY_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// RazorpayClient
// ---------------------------------------------------------------------------

/// HTTP client for the vendor orders API.
pub struct RazorpayClient {
    config: PaymentConfig,
    client: reqwest::Client,
}

impl RazorpayClient {
    /// Create a client with a pre-configured HTTP transport.
    pub fn new(config: PaymentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { config, client }
    }

    /// Execute a single order fetch.
    async fn get_order(&self, order_id: &str) -> Result<PaymentOrder, PaymentError> {
        let url = format!("{}/orders/{}", self.config.api_base, order_id);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(PaymentError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.json::<PaymentOrder>().await?)
    }
}

#[async_trait::async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, PaymentError> {
        let url = format!("{}/orders", self.config.api_base);
        let payload = serde_json::json!({
            "amount": amount_minor,
            "currency": currency,
            "receipt": receipt,
        });
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(PaymentError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.json::<PaymentOrder>().await?)
    }

    /// Fetch an order with retry.
    ///
    /// Reads are safe to replay, so transient failures back off and try
    /// again before giving up.
    async fn fetch_order(&self, order_id: &str) -> Result<PaymentOrder, PaymentError> {
        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.get_order(order_id).await {
                Ok(order) => return Ok(order),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        order_id,
                        error = %e,
                        "Order fetch attempt failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.get_order(order_id).await {
            Ok(order) => Ok(order),
            Err(e) => {
                tracing::error!(order_id, error = %e, "Order fetch failed after all retries");
                Err(e)
            }
        }
    }

    fn key_id(&self) -> &str {
        &self.config.key_id
    }
}

// ---------------------------------------------------------------------------
// UnconfiguredGateway
// ---------------------------------------------------------------------------

/// Stand-in used when the payment env vars are absent. Every call fails
/// fast instead of hanging on a bad endpoint.
pub struct UnconfiguredGateway;

#[async_trait::async_trait]
impl PaymentGateway for UnconfiguredGateway {
    async fn create_order(
        &self,
        _amount_minor: i64,
        _currency: &str,
        _receipt: &str,
    ) -> Result<PaymentOrder, PaymentError> {
        Err(PaymentError::NotConfigured)
    }

    async fn fetch_order(&self, _order_id: &str) -> Result<PaymentOrder, PaymentError> {
        Err(PaymentError::NotConfigured)
    }

    fn key_id(&self) -> &str {
        ""
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_key_id() {
        std::env::remove_var("RAZORPAY_KEY_ID");
        assert!(PaymentConfig::from_env().is_none());
    }

    #[test]
    fn order_is_paid_only_when_status_paid() {
        let mut order = PaymentOrder {
            id: "order_1".to_string(),
            amount: 200000,
            currency: "INR".to_string(),
            status: "created".to_string(),
        };
        assert!(!order.is_paid());
        order.status = STATUS_PAID.to_string();
        assert!(order.is_paid());
    }

    #[test]
    fn order_parses_with_extra_fields() {
        let json = r#"{
            "id": "order_abc",
            "amount": 300000,
            "currency": "INR",
            "status": "paid",
            "receipt": "receipt_xyz",
            "attempts": 1
        }"#;
        let order: PaymentOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "order_abc");
        assert_eq!(order.amount, 300000);
        assert!(order.is_paid());
    }

    #[test]
    fn payment_error_display_http_status() {
        let err = PaymentError::HttpStatus(502);
        assert_eq!(err.to_string(), "Payment gateway returned HTTP 502");
    }

    #[tokio::test]
    async fn unconfigured_gateway_fails_fast() {
        let gateway = UnconfiguredGateway;
        assert!(matches!(
            gateway.create_order(100, "INR", "receipt_1").await,
            Err(PaymentError::NotConfigured)
        ));
        assert!(matches!(
            gateway.fetch_order("order_1").await,
            Err(PaymentError::NotConfigured)
        ));
        assert_eq!(gateway.key_id(), "");
    }
}
