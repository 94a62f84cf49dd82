use chrono::NaiveDateTime;

// a ride as it exists once the store has assigned it an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub ride_id: i64,
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
    pub created: Option<NaiveDateTime>,
}

// a validated ride that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}
