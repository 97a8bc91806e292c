use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use rentaride_core::availability::{self, DateRange};
use rentaride_core::error::CoreError;
use rentaride_core::types::{Day, DbId};
use rentaride_db::models::car::{Car, CarFilters};
use rentaride_db::repositories::{CarRepo, CommitmentRepo};
use rentaride_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public car search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCarsQuery {
    pub location: Option<String>,
    pub category: Option<String>,
    pub transmission: Option<String>,
    pub pickup_date: Option<Day>,
    pub return_date: Option<Day>,
}

/// Car detail plus its committed ranges, so date pickers can block days
/// without a second round trip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetail {
    #[serde(flatten)]
    pub car: Car,
    pub unavailable_dates: Vec<DateRange>,
}

/// GET /cars - public search over listed cars.
///
/// `pickupDate` and `returnDate` are optional but only valid as a pair;
/// when present, cars committed anywhere in that window are dropped.
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<ListCarsQuery>,
) -> AppResult<Json<DataResponse<Vec<Car>>>> {
    let window = match (query.pickup_date, query.return_date) {
        (Some(pickup), Some(ret)) => Some(availability::rental_interval(pickup, ret)?),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "pickupDate and returnDate must be provided together".to_string(),
            ))
        }
    };

    let filters = CarFilters {
        location: query.location,
        category: query.category,
        transmission: query.transmission,
    };
    let cars = search_available(&state.pool, &filters, window).await?;

    Ok(Json(DataResponse::new(cars)))
}

/// GET /cars/{id} - single car with its committed date ranges.
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CarDetail>>> {
    let car = CarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Car", id)))?;

    let unavailable_dates = CommitmentRepo::list_for_car(&state.pool, id)
        .await?
        .iter()
        .map(|c| c.range())
        .collect();

    Ok(Json(DataResponse::new(CarDetail {
        car,
        unavailable_dates,
    })))
}

/// Fetch listed cars matching `filters`, then drop the ones whose
/// commitments overlap `window`. All candidates share one batched
/// commitments query; the overlap test itself is the core evaluator.
pub(crate) async fn search_available(
    pool: &DbPool,
    filters: &CarFilters,
    window: Option<DateRange>,
) -> Result<Vec<Car>, AppError> {
    let cars = CarRepo::list_available(pool, filters).await?;

    let Some(window) = window else {
        return Ok(cars);
    };

    let ids: Vec<DbId> = cars.iter().map(|c| c.id).collect();
    let committed = CommitmentRepo::ranges_by_car(pool, &ids).await?;

    Ok(cars
        .into_iter()
        .filter(|car| {
            committed
                .get(&car.id)
                .map(|ranges| availability::is_available(ranges, &window))
                .unwrap_or(true)
        })
        .collect())
}
