use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentaride_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in minor units (paise for INR).
    pub amount: i64,
    pub currency: Option<String>,
}

/// Order descriptor handed to the frontend checkout widget.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    /// Public key the checkout widget initializes with.
    pub key_id: String,
}

/// POST /payment/create-order - create a gateway order for checkout.
///
/// The receipt reference is minted server-side; the gateway echoes it
/// back in dashboards and webhooks.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderRequest>,
) -> AppResult<Json<DataResponse<OrderResponse>>> {
    if input.amount <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Order amount must be positive".to_string(),
        )));
    }

    let currency = input
        .currency
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let receipt = format!("receipt_{}", Uuid::new_v4());

    let order = state
        .payments
        .create_order(input.amount, &currency, &receipt)
        .await?;

    Ok(Json(DataResponse::new(OrderResponse {
        id: order.id,
        amount: order.amount,
        currency: order.currency,
        key_id: state.payments.key_id().to_string(),
    })))
}
