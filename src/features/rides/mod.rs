pub mod model;
pub mod validation;

use crate::domain::Ride;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    routing::get,
};
use model::{CreateRideRequest, JsonRide, ListRidesQuery};
use validation::{parse_page, parse_ride_id, validate_new_ride, RideValidationError};

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn rides_router() -> Router<AppState> {
    Router::new()
        .route("/rides", get(list_rides_handler).post(create_ride_handler))
        .route("/rides/{id}", get(get_ride_handler))
}

async fn create_ride_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRideRequest>, JsonRejection>,
) -> Result<Json<Vec<JsonRide>>, ApiError> {
    // an unreadable body is validated like an empty one
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected ride body, validating as empty");
            CreateRideRequest::default()
        }
    };

    let new_ride = validate_new_ride(&request)?;
    let rides = state.rides.create_ride(&new_ride).await?;

    if let Some(ride) = rides.first() {
        tracing::info!(ride_id = ride.ride_id, "Created ride");
    }

    Ok(Json(to_json_rides(rides)))
}

async fn list_rides_handler(
    State(state): State<AppState>,
    query: Result<Query<ListRidesQuery>, QueryRejection>,
) -> Result<Json<Vec<JsonRide>>, ApiError> {
    let Query(query) = query.map_err(|_| RideValidationError::PageNumber)?;
    let page = parse_page(query.page.as_deref())?;

    let rides = state.rides.list_rides(page).await?;
    if rides.is_empty() {
        tracing::debug!(page, "No rides on page");
        return Err(ApiError::RidesNotFound);
    }

    Ok(Json(to_json_rides(rides)))
}

async fn get_ride_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<JsonRide>>, ApiError> {
    let ride_id = parse_ride_id(&raw_id)?;

    let rides = state.rides.get_ride_by_id(ride_id).await?;
    if rides.is_empty() {
        tracing::debug!(ride_id, "Ride not found");
        return Err(ApiError::RidesNotFound);
    }

    Ok(Json(to_json_rides(rides)))
}

fn to_json_rides(rides: Vec<Ride>) -> Vec<JsonRide> {
    rides
        .into_iter()
        .map(|ride| ride_to_json_ride(ride, CREATED_FORMAT))
        .collect()
}

fn ride_to_json_ride(ride: Ride, format: &str) -> JsonRide {
    JsonRide {
        ride_id: ride.ride_id,
        start_lat: ride.start_lat,
        start_long: ride.start_long,
        end_lat: ride.end_lat,
        end_long: ride.end_long,
        rider_name: ride.rider_name,
        driver_name: ride.driver_name,
        driver_vehicle: ride.driver_vehicle,
        created: ride.created.map(|val| val.format(format).to_string()),
    }
}
