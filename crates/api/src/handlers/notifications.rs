use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use rentaride_core::error::CoreError;
use rentaride_core::types::Day;
use rentaride_gateways::BookingConfirmation;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CarSummary {
    pub brand: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub car: CarSummary,
    pub pickup_date: Day,
    pub return_date: Day,
    pub total_cost: i64,
}

/// POST /notifications/send - booking confirmation over email and SMS.
///
/// Channels whose configuration is absent are skipped with a warning; a
/// configured channel that fails to deliver is an upstream error.
pub async fn send(
    State(state): State<AppState>,
    Json(input): Json<SendNotificationRequest>,
) -> AppResult<Json<MessageResponse>> {
    let confirmation = BookingConfirmation {
        car_brand: input.car.brand,
        car_model: input.car.model,
        pickup_date: input.pickup_date,
        return_date: input.return_date,
        total_cost: input.total_cost,
    };

    if let Some(email) = &input.email {
        match &state.email {
            Some(delivery) => {
                delivery
                    .send_confirmation(email, &confirmation)
                    .await
                    .map_err(|err| {
                        AppError::Core(CoreError::Upstream {
                            service: "email",
                            message: err.to_string(),
                        })
                    })?;
            }
            None => tracing::warn!("Email channel not configured, skipping confirmation"),
        }
    }

    if let Some(number) = &input.phone_number {
        match &state.sms {
            Some(delivery) => {
                delivery
                    .send_confirmation(number, &confirmation)
                    .await
                    .map_err(|err| {
                        AppError::Core(CoreError::Upstream {
                            service: "sms",
                            message: err.to_string(),
                        })
                    })?;
            }
            None => tracing::warn!("SMS channel not configured, skipping confirmation"),
        }
    }

    Ok(Json(MessageResponse::new("Notifications sent")))
}
