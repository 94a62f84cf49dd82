use crate::domain::Ride;
use chrono::NaiveDateTime;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// a row of the Rides table, column names as stored
#[derive(sqlx::FromRow, PartialEq, Clone, Debug, Display)]
#[display("ride {} ({} with {})", ride_id, rider_name, driver_name)]
pub struct DbRide {
    #[sqlx(rename = "rideID")]
    pub ride_id: i64,
    #[sqlx(rename = "startLat")]
    pub start_lat: f64,
    #[sqlx(rename = "startLong")]
    pub start_long: f64,
    #[sqlx(rename = "endLat")]
    pub end_lat: f64,
    #[sqlx(rename = "endLong")]
    pub end_long: f64,
    #[sqlx(rename = "riderName")]
    pub rider_name: String,
    #[sqlx(rename = "driverName")]
    pub driver_name: String,
    #[sqlx(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: Option<NaiveDateTime>,
}

impl From<DbRide> for Ride {
    fn from(db_ride: DbRide) -> Self {
        Ride {
            ride_id: db_ride.ride_id,
            start_lat: db_ride.start_lat,
            start_long: db_ride.start_long,
            end_lat: db_ride.end_lat,
            end_long: db_ride.end_long,
            rider_name: db_ride.rider_name,
            driver_name: db_ride.driver_name,
            driver_vehicle: db_ride.driver_vehicle,
            created: db_ride.created,
        }
    }
}

// response shape, keys mirror the table's column names
#[derive(Serialize, Deserialize, Debug)]
pub struct JsonRide {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    #[serde(rename = "startLat")]
    pub start_lat: f64,
    #[serde(rename = "startLong")]
    pub start_long: f64,
    #[serde(rename = "endLat")]
    pub end_lat: f64,
    #[serde(rename = "endLong")]
    pub end_long: f64,
    #[serde(rename = "riderName")]
    pub rider_name: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: Option<String>,
}

// body of POST /rides. fields are kept loose so the validator can report
// type problems (a numeric rider_name, a missing coordinate) itself
#[derive(Deserialize, Debug, Default)]
pub struct CreateRideRequest {
    pub start_lat: Option<Value>,
    pub start_long: Option<Value>,
    pub end_lat: Option<Value>,
    pub end_long: Option<Value>,
    pub rider_name: Option<Value>,
    pub driver_name: Option<Value>,
    pub driver_vehicle: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListRidesQuery {
    pub page: Option<String>,
}
