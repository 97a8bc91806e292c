use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use rentaride_core::availability::{self, UnavailableInput};
use rentaride_core::error::CoreError;
use rentaride_core::roles::{ROLE_ADMIN, ROLE_OWNER};
use rentaride_core::types::DbId;
use rentaride_db::models::car::{Car, CreateCar};
use rentaride_db::models::commitment::CarCommitment;
use rentaride_db::models::dashboard::OwnerDashboard;
use rentaride_db::models::user::User;
use rentaride_db::repositories::{CarRepo, CommitmentRepo, DashboardRepo, UserRepo};
use rentaride_gateways::media::{AVATAR_IMAGE_WIDTH, CAR_IMAGE_WIDTH};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireOwner};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCarRequest {
    #[serde(flatten)]
    pub car: CreateCar,
    /// Base64 image payload, uploaded to the media CDN when present.
    pub image: Option<String>,
    /// Initial blocked dates; single days and ranges both accepted.
    pub unavailable_dates: Option<Vec<UnavailableInput>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarIdRequest {
    pub car_id: DbId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDatesRequest {
    pub car_id: DbId,
    pub unavailable_dates: Vec<UnavailableInput>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateImageRequest {
    pub image: String,
}

/// POST /owner/change-role - self-service upgrade to the owner role.
pub async fn change_role_to_owner(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<MessageResponse>> {
    UserRepo::update_role(&state.pool, &user.uid, ROLE_OWNER)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &user.uid)))?;

    Ok(Json(MessageResponse::new("Now you can list cars")))
}

/// POST /owner/add-car - create a listing, optionally with an image and
/// initial blocked dates.
pub async fn add_car(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
    Json(input): Json<AddCarRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Car>>)> {
    let image_url = match &input.image {
        Some(data) => Some(upload_image(&state, data, "/cars", CAR_IMAGE_WIDTH).await?),
        None => None,
    };

    let car = CarRepo::create(&state.pool, &user.uid, &input.car, image_url.as_deref()).await?;

    if let Some(dates) = &input.unavailable_dates {
        let ranges = availability::normalize(dates)?;
        CommitmentRepo::block_dates(&state.pool, car.id, &ranges).await?;
    }

    Ok((StatusCode::CREATED, Json(DataResponse::new(car))))
}

/// GET /owner/cars - all of the caller's listings, hidden ones included.
pub async fn owner_cars(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
) -> AppResult<Json<DataResponse<Vec<Car>>>> {
    let cars = CarRepo::list_by_owner(&state.pool, &user.uid).await?;
    Ok(Json(DataResponse::new(cars)))
}

/// POST /owner/toggle-car - flip whether a listing appears in search.
pub async fn toggle_car(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
    Json(input): Json<CarIdRequest>,
) -> AppResult<Json<DataResponse<Car>>> {
    let car = load_owned_car(&state, input.car_id, &user).await?;
    let car = CarRepo::toggle_availability(&state.pool, car.id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Car", input.car_id)))?;

    Ok(Json(DataResponse::new(car)))
}

/// POST /owner/delete-car - remove a listing. The row survives so past
/// bookings keep their car reference, but it loses its owner link and
/// leaves search.
pub async fn delete_car(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
    Json(input): Json<CarIdRequest>,
) -> AppResult<Json<MessageResponse>> {
    let car = load_owned_car(&state, input.car_id, &user).await?;
    CarRepo::unlist(&state.pool, car.id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Car", input.car_id)))?;

    Ok(Json(MessageResponse::new("Car removed")))
}

/// POST /owner/block-dates - block dates for maintenance or bookings
/// taken outside the platform.
pub async fn block_dates(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
    Json(input): Json<BlockDatesRequest>,
) -> AppResult<Json<DataResponse<Vec<CarCommitment>>>> {
    let car = load_owned_car(&state, input.car_id, &user).await?;
    let ranges = availability::normalize(&input.unavailable_dates)?;
    let commitments = CommitmentRepo::block_dates(&state.pool, car.id, &ranges).await?;

    Ok(Json(DataResponse::new(commitments)))
}

/// GET /owner/dashboard - listing and booking aggregates for the caller.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireOwner(user): RequireOwner,
) -> AppResult<Json<DataResponse<OwnerDashboard>>> {
    let data = DashboardRepo::for_owner(&state.pool, &user.uid).await?;
    Ok(Json(DataResponse::new(data)))
}

/// POST /owner/update-image - upload and set the caller's avatar.
pub async fn update_image(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<UpdateImageRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    let url = upload_image(&state, &input.image, "/users", AVATAR_IMAGE_WIDTH).await?;

    let user = UserRepo::update_image(&state.pool, &user.uid, &url)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &user.uid)))?;

    Ok(Json(DataResponse::new(user)))
}

/// Load a car and check the caller owns it. Admins pass.
async fn load_owned_car(state: &AppState, car_id: DbId, user: &AuthUser) -> Result<Car, AppError> {
    let car = CarRepo::find_by_id(&state.pool, car_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Car", car_id)))?;

    let is_owner = car.owner_id.as_deref() == Some(user.uid.as_str());
    if !is_owner && user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only manage your own cars".to_string(),
        )));
    }

    Ok(car)
}

/// Upload a base64 image and return its CDN delivery URL, sized for the
/// given width. Fails with an upstream error when the media channel is
/// not configured.
async fn upload_image(
    state: &AppState,
    base64_data: &str,
    folder: &str,
    width: u32,
) -> Result<String, AppError> {
    let media = state.media.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Upstream {
            service: "media",
            message: "image hosting is not configured".to_string(),
        })
    })?;

    let file_name = Uuid::new_v4().to_string();
    let uploaded = media
        .upload_base64(base64_data, &file_name, folder)
        .await
        .map_err(|err| {
            AppError::Core(CoreError::Upstream {
                service: "media",
                message: err.to_string(),
            })
        })?;

    Ok(media.optimized_url(&uploaded.file_path, width))
}
