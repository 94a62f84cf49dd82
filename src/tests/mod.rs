mod unit_sqlite_rides_database;

use crate::config::RidesConfig;
use crate::database::sqlite::SqliteRideRepository;
use crate::db::init_db_pool;
use crate::domain::NewRide;

// create a sqlite database in memory to test against, with the Rides table in place
pub async fn setup_test_repo() -> SqliteRideRepository {
    let pool = init_db_pool(&RidesConfig::in_memory())
        .await
        .expect("Failed to create in-memory database");

    SqliteRideRepository::new(pool)
}

// the ride used throughout the api tests
pub fn create_mock_ride(rider_name: &str) -> NewRide {
    NewRide {
        start_lat: 1.13,
        start_long: 2.13,
        end_lat: 3.13,
        end_long: 4.13,
        rider_name: rider_name.to_string(),
        driver_name: "UltraDriver".to_string(),
        driver_vehicle: "Sanrio".to_string(),
    }
}
