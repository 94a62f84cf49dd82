use crate::domain::NewRide;
use crate::features::rides::model::CreateRideRequest;
use serde_json::Value;
use thiserror::Error;

const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

// the Display text of each variant is what the client sees
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum RideValidationError {
    #[error("Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
    StartCoordinates,
    #[error("End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
    EndCoordinates,
    #[error("Rider name must be a non empty string")]
    RiderName,
    #[error("Driver name must be a non empty string")]
    DriverName,
    #[error("Driver vehicle must be a non empty string")]
    DriverVehicle,
    #[error("Page number must be an integer and larger than 0")]
    PageNumber,
    #[error("Ride ID must be an integer and larger than 0")]
    RideId,
}

// checks run in a fixed order and stop at the first failure:
// start coordinates, end coordinates, rider, driver, vehicle
pub fn validate_new_ride(request: &CreateRideRequest) -> Result<NewRide, RideValidationError> {
    let (start_lat, start_long) =
        coordinate_pair(request.start_lat.as_ref(), request.start_long.as_ref())
            .ok_or(RideValidationError::StartCoordinates)?;

    let (end_lat, end_long) = coordinate_pair(request.end_lat.as_ref(), request.end_long.as_ref())
        .ok_or(RideValidationError::EndCoordinates)?;

    let rider_name =
        non_empty_string(request.rider_name.as_ref()).ok_or(RideValidationError::RiderName)?;
    let driver_name =
        non_empty_string(request.driver_name.as_ref()).ok_or(RideValidationError::DriverName)?;
    let driver_vehicle = non_empty_string(request.driver_vehicle.as_ref())
        .ok_or(RideValidationError::DriverVehicle)?;

    Ok(NewRide {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

// absent page means the first one
pub fn parse_page(raw: Option<&str>) -> Result<i64, RideValidationError> {
    match raw {
        None => Ok(1),
        Some(raw) => positive_integer(raw).ok_or(RideValidationError::PageNumber),
    }
}

pub fn parse_ride_id(raw: &str) -> Result<i64, RideValidationError> {
    positive_integer(raw).ok_or(RideValidationError::RideId)
}

// digit strings past i64::MAX clamp to it; no ride or page can reach that far
fn positive_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let value = match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) if is_unsigned_digits(raw) => i64::MAX,
        Err(_) => return None,
    };
    Some(value).filter(|value| *value >= 1)
}

fn is_unsigned_digits(raw: &str) -> bool {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn coordinate_pair(lat: Option<&Value>, long: Option<&Value>) -> Option<(f64, f64)> {
    let lat = number(lat?).filter(|v| in_range(*v, LATITUDE_RANGE))?;
    let long = number(long?).filter(|v| in_range(*v, LONGITUDE_RANGE))?;
    Some((lat, long))
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}

// json numbers, or strings holding one, e.g. "1.13"
fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}
