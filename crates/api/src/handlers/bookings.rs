use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use rentaride_core::availability;
use rentaride_core::error::CoreError;
use rentaride_core::pricing;
use rentaride_core::roles::ROLE_ADMIN;
use rentaride_core::status::{self, BookingStatus};
use rentaride_core::types::{Day, DbId};
use rentaride_db::models::booking::{Booking, BookingWithCar, CreateBooking};
use rentaride_db::models::car::{Car, CarFilters};
use rentaride_db::repositories::{BookingRepo, CarRepo};
use rentaride_gateways::PaymentError;

use crate::error::{AppError, AppResult};
use crate::handlers::cars::search_available;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireOwner};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    pub location: String,
    pub pickup_date: Day,
    pub return_date: Day,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Car id; the field is named `car` to match the frontend payload.
    pub car: DbId,
    pub pickup_date: Day,
    pub return_date: Day,
    pub email: String,
    pub phone_number: Option<String>,
    pub payment_order_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    pub booking_id: DbId,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    pub booking_id: DbId,
}

/// POST /bookings/check-availability - cars in a location that are free
/// over the requested window. Public.
pub async fn check_availability(
    State(state): State<AppState>,
    Json(input): Json<CheckAvailabilityRequest>,
) -> AppResult<Json<DataResponse<Vec<Car>>>> {
    let window = availability::rental_interval(input.pickup_date, input.return_date)?;
    let filters = CarFilters {
        location: Some(input.location),
        ..CarFilters::default()
    };
    let cars = search_available(&state.pool, &filters, Some(window)).await?;

    Ok(Json(DataResponse::new(cars)))
}

/// POST /bookings/create - commit a booking backed by a paid order.
///
/// The order is verified against the gateway before any storage write:
/// it must exist, be paid, and match the server-computed quote. The
/// storage commit then re-checks availability under a car-row lock, so a
/// paid order still gets a 409 if someone else took the dates first.
pub async fn create_booking(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Booking>>)> {
    let interval = availability::rental_interval(input.pickup_date, input.return_date)?;

    let car = CarRepo::find_by_id(&state.pool, input.car)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Car", input.car)))?;

    let quote = pricing::quote(&interval, car.price_per_day)?;

    // An order the gateway does not know is an unconfirmed payment, not
    // a gateway outage.
    let order = match state.payments.fetch_order(&input.payment_order_id).await {
        Ok(order) => order,
        Err(PaymentError::HttpStatus(404)) => {
            return Err(AppError::Core(CoreError::PaymentNotConfirmed(format!(
                "Order {} not found at the gateway",
                input.payment_order_id
            ))))
        }
        Err(err) => return Err(AppError::Payment(err)),
    };

    if !order.is_paid() {
        return Err(AppError::Core(CoreError::PaymentNotConfirmed(format!(
            "Order {} has status {}",
            order.id, order.status
        ))));
    }
    let expected_minor = quote.total_cost * 100;
    if order.amount != expected_minor {
        return Err(AppError::Core(CoreError::PaymentNotConfirmed(format!(
            "Order amount {} does not match the quoted amount {}",
            order.amount, expected_minor
        ))));
    }

    let booking = BookingRepo::create_confirmed(
        &state.pool,
        &CreateBooking {
            car_id: car.id,
            user_id: user.uid,
            interval,
            total_days: quote.total_days,
            total_cost: quote.total_cost,
            contact_email: input.email,
            contact_phone: input.phone_number,
            payment_order_id: input.payment_order_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(booking))))
}

/// GET /bookings/user - bookings made by the caller.
pub async fn user_bookings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<BookingWithCar>>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, &user.uid).await?;
    Ok(Json(DataResponse::new(bookings)))
}

/// GET /bookings/owner - bookings on the caller's cars.
pub async fn owner_bookings(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
) -> AppResult<Json<DataResponse<Vec<BookingWithCar>>>> {
    let bookings = BookingRepo::list_for_owner(&state.pool, &user.uid).await?;
    Ok(Json(DataResponse::new(bookings)))
}

/// POST /bookings/change-status - move a booking through the state
/// machine. Cancelling this way keeps the row for history but frees its
/// committed dates.
pub async fn change_status(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
    Json(input): Json<ChangeStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    let booking = BookingRepo::find_by_id(&state.pool, input.booking_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Booking", input.booking_id)))?;

    authorize_booking_manager(&booking, &user)?;

    let current = stored_status(&booking)?;
    let target = BookingStatus::parse(&input.status)?;
    status::validate_transition(current, target)?;

    BookingRepo::update_status(&state.pool, booking.id, target).await?;

    Ok(Json(MessageResponse::new("Booking status updated")))
}

/// POST /bookings/cancel - delete a booking and free exactly its dates.
///
/// Unlike a status change to Cancelled, this removes the row entirely.
/// The state machine still applies: completed rentals cannot be
/// cancelled.
pub async fn cancel_booking(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
    Json(input): Json<CancelBookingRequest>,
) -> AppResult<Json<MessageResponse>> {
    let booking = BookingRepo::find_by_id(&state.pool, input.booking_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Booking", input.booking_id)))?;

    authorize_booking_manager(&booking, &user)?;

    let current = stored_status(&booking)?;
    status::validate_transition(current, BookingStatus::Cancelled)?;

    if !BookingRepo::cancel(&state.pool, booking.id).await? {
        return Err(AppError::Core(CoreError::not_found("Booking", booking.id)));
    }

    Ok(Json(MessageResponse::new("Booking cancelled")))
}

/// Owners manage bookings on their own cars; admins manage any.
fn authorize_booking_manager(booking: &Booking, user: &AuthUser) -> Result<(), AppError> {
    let is_owner = booking.owner_id.as_deref() == Some(user.uid.as_str());
    if !is_owner && user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only manage bookings for your own cars".to_string(),
        )));
    }
    Ok(())
}

/// Parse the stored status column. The schema constrains it to known
/// values, so a parse failure is a server-side bug, not client error.
fn stored_status(booking: &Booking) -> Result<BookingStatus, AppError> {
    BookingStatus::parse(&booking.status).map_err(|_| {
        AppError::InternalError(format!(
            "Booking {} has unrecognized status {:?}",
            booking.id, booking.status
        ))
    })
}
