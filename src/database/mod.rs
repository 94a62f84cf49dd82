use crate::domain::{NewRide, Ride};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// number of rides returned per page by `list_rides`
pub const PAGE_SIZE: i64 = 5;

// a RideRepository is shared between request handlers behind an Arc
// sqlx::Pool is thread safe
// db specific implementations live next to this file, e.g. "sqlite.rs"
#[async_trait]
pub trait RideRepository: Send + Sync {
    // inserts the ride and returns the row exactly as stored
    async fn create_ride(&self, ride: &NewRide) -> Result<Vec<Ride>>;

    // pages are 1-based. the page window is selected by identifier threshold,
    // so it assumes rideIDs are contiguous
    async fn list_rides(&self, page: i64) -> Result<Vec<Ride>>;

    async fn get_ride_by_id(&self, ride_id: i64) -> Result<Vec<Ride>>;
}
