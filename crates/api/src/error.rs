use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use rentaride_core::error::CoreError;
use rentaride_db::repositories::ReserveError;
use rentaride_gateways::PaymentError;

/// Top-level API error wrapping domain, storage, and gateway errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Reserve(#[from] ReserveError),

    #[error("payment gateway error: {0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
            }
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
            AppError::Core(CoreError::Conflict(_)) => {
                (StatusCode::CONFLICT, "CONFLICT", self.to_string())
            }
            AppError::Core(CoreError::InvalidTransition { .. }) => {
                (StatusCode::CONFLICT, "INVALID_TRANSITION", self.to_string())
            }
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.to_string())
            }
            AppError::Core(CoreError::Forbidden(_)) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", self.to_string())
            }
            AppError::Core(CoreError::PaymentNotConfirmed(_)) => (
                StatusCode::PAYMENT_REQUIRED,
                "PAYMENT_NOT_CONFIRMED",
                self.to_string(),
            ),
            AppError::Core(CoreError::Upstream { service, message }) => {
                tracing::error!(service, %message, "upstream service failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_FAILURE",
                    self.to_string(),
                )
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Storage errors ---
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Reserve(ReserveError::CarNotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
            }
            AppError::Reserve(ReserveError::CarNotAvailable(_)) => {
                (StatusCode::CONFLICT, "CONFLICT", self.to_string())
            }
            AppError::Reserve(ReserveError::Overlap(_)) => {
                (StatusCode::CONFLICT, "CONFLICT", self.to_string())
            }
            AppError::Reserve(ReserveError::Db(err)) => classify_sqlx_error(err),

            // --- Payment gateway errors ---
            AppError::Payment(PaymentError::NotConfigured) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_FAILURE",
                "Payment gateway is not configured".to_string(),
            ),
            AppError::Payment(PaymentError::HttpStatus(status)) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_FAILURE",
                format!("Payment gateway returned HTTP {status}"),
            ),
            AppError::Payment(PaymentError::Request(err)) => {
                tracing::error!("payment gateway request failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_FAILURE",
                    "Payment gateway request failed".to_string(),
                )
            }

            // --- Request-level errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "code": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Map raw sqlx errors onto the response taxonomy.
///
/// Constraint names are part of the schema contract: unique indexes are
/// prefixed `uq_` and exclusion constraints `excl_`, so their violations
/// can be reported as conflicts instead of opaque 500s.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "The requested record was not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.to_string()).unwrap_or_default();
            let constraint = db_err.constraint().unwrap_or("unknown");
            if code == "23505" && constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            if code == "23P01" && constraint.starts_with("excl_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Overlapping range violates exclusion constraint: {constraint}"),
                );
            }
            tracing::error!("database error: {db_err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "A database error occurred".to_string(),
            )
        }
        _ => {
            tracing::error!("database error: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "A database error occurred".to_string(),
            )
        }
    }
}
