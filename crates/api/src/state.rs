use std::sync::Arc;

use rentaride_db::DbPool;
use rentaride_gateways::{EmailDelivery, MediaClient, PaymentGateway, SmsDelivery};

use crate::config::ServerConfig;

/// Shared application state, cheaply cloneable (all fields are Arcs or pools).
///
/// The payment gateway is always present; when unconfigured it is an
/// [`rentaride_gateways::UnconfiguredGateway`] that fails fast. The
/// optional channels are `None` when their environment is missing, and
/// handlers skip or reject accordingly.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    pub payments: Arc<dyn PaymentGateway>,
    pub email: Option<Arc<EmailDelivery>>,
    pub sms: Option<Arc<SmsDelivery>>,
    pub media: Option<Arc<MediaClient>>,
}
