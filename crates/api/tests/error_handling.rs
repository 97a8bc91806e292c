//! Error-to-response mapping: statuses, stable codes, and the envelope.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use rentaride_api::error::AppError;
use rentaride_core::error::CoreError;
use rentaride_core::status::BookingStatus;
use rentaride_db::repositories::ReserveError;
use rentaride_gateways::PaymentError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ---------------------------------------------------------------------------
// Core variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::not_found("Car", 7))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Car with id 7 not found");
}

#[tokio::test]
async fn test_validation_maps_to_400() {
    let err = AppError::Core(CoreError::Validation("Return date must be after pickup".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Return date must be after pickup");
}

#[tokio::test]
async fn test_conflict_maps_to_409() {
    let err = AppError::Core(CoreError::Conflict("Dates already taken".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_invalid_transition_maps_to_409_with_own_code() {
    let err = AppError::Core(CoreError::InvalidTransition {
        from: BookingStatus::Completed,
        to: BookingStatus::Pending,
    });
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "INVALID_TRANSITION");
    assert_eq!(
        json["message"],
        "Invalid status transition: Completed -> Pending"
    );
}

#[tokio::test]
async fn test_unauthorized_maps_to_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forbidden_maps_to_403() {
    let err = AppError::Core(CoreError::Forbidden("Owner access required".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_payment_not_confirmed_maps_to_402() {
    let err = AppError::Core(CoreError::PaymentNotConfirmed(
        "Order order_1 has status created".into(),
    ));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(json["code"], "PAYMENT_NOT_CONFIRMED");
}

#[tokio::test]
async fn test_upstream_maps_to_502() {
    let err = AppError::Core(CoreError::Upstream {
        service: "email",
        message: "relay refused".into(),
    });
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert_eq!(json["message"], "email failed: relay refused");
}

#[tokio::test]
async fn test_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("connection string leaked".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Storage and gateway variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_reserve_car_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Reserve(ReserveError::CarNotFound(9))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Car with id 9 not found");
}

#[tokio::test]
async fn test_reserve_unlisted_car_maps_to_409() {
    let (status, json) =
        error_to_response(AppError::Reserve(ReserveError::CarNotAvailable(9))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_reserve_overlap_maps_to_409() {
    let (status, json) = error_to_response(AppError::Reserve(ReserveError::Overlap(9))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["message"],
        "Car 9 is already committed for the requested dates"
    );
}

#[tokio::test]
async fn test_unconfigured_gateway_maps_to_502() {
    let (status, json) = error_to_response(AppError::Payment(PaymentError::NotConfigured)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert_eq!(json["message"], "Payment gateway is not configured");
}

#[tokio::test]
async fn test_gateway_http_error_maps_to_502() {
    let (status, json) = error_to_response(AppError::Payment(PaymentError::HttpStatus(500))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_FAILURE");
    assert_eq!(json["message"], "Payment gateway returned HTTP 500");
}

// ---------------------------------------------------------------------------
// Request-level variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_bad_request_maps_to_400() {
    let err = AppError::BadRequest("pickupDate and returnDate must be provided together".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_internal_variant_is_sanitized() {
    let err = AppError::InternalError("Booking 3 has unrecognized status \"Paused\"".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_every_error_carries_the_envelope() {
    let (_, json) = error_to_response(AppError::Core(CoreError::not_found("Booking", 1))).await;

    assert_eq!(json["success"], false);
    assert!(json["code"].is_string());
    assert!(json["message"].is_string());
}
