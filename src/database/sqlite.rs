use crate::database::{RideRepository, PAGE_SIZE};
use crate::domain::{NewRide, Ride};
use crate::features::rides::model::DbRide;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRideRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRideRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RideRepository for SqliteRideRepository {
    async fn create_ride(&self, ride: &NewRide) -> Result<Vec<Ride>> {
        // insert and read back in one transaction so the returned row is the one we wrote
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to open transaction for ride insert")?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO Rides (
                startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ride.start_lat)
        .bind(ride.start_long)
        .bind(ride.end_lat)
        .bind(ride.end_long)
        .bind(&ride.rider_name)
        .bind(&ride.driver_name)
        .bind(&ride.driver_vehicle)
        .execute(&mut *tx)
        .await
        .context("Failed to insert ride")?;

        let db_rides = sqlx::query_as::<_, DbRide>("SELECT * FROM Rides WHERE rideID = ?")
            .bind(inserted.last_insert_rowid())
            .fetch_all(&mut *tx)
            .await
            .context("Failed to read back inserted ride")?;

        tx.commit()
            .await
            .context("Failed to commit ride insert")?;

        Ok(db_rides.into_iter().map(Ride::from).collect())
    }

    async fn list_rides(&self, page: i64) -> Result<Vec<Ride>> {
        let lower_limit = (page - 1).saturating_mul(PAGE_SIZE);

        let db_rides = sqlx::query_as::<_, DbRide>(
            "SELECT * FROM Rides WHERE rideID > ? ORDER BY rideID LIMIT ?",
        )
        .bind(lower_limit)
        .bind(PAGE_SIZE)
        .fetch_all(&self.pool)
        .await
        .context(format!("Failed to list rides on page {}", page))?;

        Ok(db_rides.into_iter().map(Ride::from).collect())
    }

    async fn get_ride_by_id(&self, ride_id: i64) -> Result<Vec<Ride>> {
        let db_rides = sqlx::query_as::<_, DbRide>("SELECT * FROM Rides WHERE rideID = ?")
            .bind(ride_id)
            .fetch_all(&self.pool)
            .await
            .context(format!("Failed to fetch ride {}", ride_id))?;

        Ok(db_rides.into_iter().map(Ride::from).collect())
    }
}
