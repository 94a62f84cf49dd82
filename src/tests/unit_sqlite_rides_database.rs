use crate::config::RidesConfig;
use crate::database::sqlite::SqliteRideRepository;
use crate::database::{RideRepository, PAGE_SIZE};
use crate::db::init_db_pool;
use crate::tests::{create_mock_ride, setup_test_repo};

// save `count` rides named rider-1..rider-count
async fn seed_rides(repo: &SqliteRideRepository, count: usize) {
    for i in 1..=count {
        repo.create_ride(&create_mock_ride(&format!("rider-{}", i)))
            .await
            .expect("Should save ride");
    }
}

// test the database's ability to save a ride and hand back the stored row
#[tokio::test]
async fn test_sqlite_create_returns_inserted_row() {
    let repo = setup_test_repo().await;

    let rides = repo
        .create_ride(&create_mock_ride("KamenRider"))
        .await
        .expect("Should save ride");

    assert_eq!(rides.len(), 1);
    let ride = &rides[0];
    assert_eq!(ride.ride_id, 1);
    assert_eq!(ride.start_lat, 1.13);
    assert_eq!(ride.start_long, 2.13);
    assert_eq!(ride.end_lat, 3.13);
    assert_eq!(ride.end_long, 4.13);
    assert_eq!(ride.rider_name, "KamenRider");
    assert_eq!(ride.driver_name, "UltraDriver");
    assert_eq!(ride.driver_vehicle, "Sanrio");
    // the store stamps the creation time
    assert!(ride.created.is_some());
}

// identifiers are assigned by the store and keep increasing
#[tokio::test]
async fn test_sqlite_assigns_increasing_ids() {
    let repo = setup_test_repo().await;

    let first = repo.create_ride(&create_mock_ride("a")).await.unwrap();
    let second = repo.create_ride(&create_mock_ride("b")).await.unwrap();

    assert_eq!(first[0].ride_id, 1);
    assert_eq!(second[0].ride_id, 2);
}

#[tokio::test]
async fn test_sqlite_get_by_id() {
    let repo = setup_test_repo().await;
    seed_rides(&repo, 3).await;

    let rides = repo.get_ride_by_id(2).await.expect("Should query");
    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].rider_name, "rider-2");

    // an id that was never assigned gives back nothing
    let missing = repo.get_ride_by_id(42).await.expect("Should query");
    assert!(missing.is_empty());
}

#[tokio::test]
async fn test_sqlite_list_empty() {
    let repo = setup_test_repo().await;

    let rides = repo.list_rides(1).await.expect("Should query");
    assert!(rides.is_empty());
}

// pages hold PAGE_SIZE rides each, ordered by id
#[tokio::test]
async fn test_sqlite_list_pages() {
    let repo = setup_test_repo().await;
    seed_rides(&repo, 7).await;

    let page_one = repo.list_rides(1).await.unwrap();
    assert_eq!(page_one.len(), PAGE_SIZE as usize);
    let ids: Vec<i64> = page_one.iter().map(|r| r.ride_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let page_two = repo.list_rides(2).await.unwrap();
    let ids: Vec<i64> = page_two.iter().map(|r| r.ride_id).collect();
    assert_eq!(ids, vec![6, 7]);

    assert!(repo.list_rides(3).await.unwrap().is_empty());
}

// a page number far past the end must not overflow the offset
#[tokio::test]
async fn test_sqlite_list_huge_page() {
    let repo = setup_test_repo().await;
    seed_rides(&repo, 1).await;

    let rides = repo.list_rides(i64::MAX).await.expect("Should query");
    assert!(rides.is_empty());
}

// quotes in names are stored verbatim, nothing is spliced into the sql
#[tokio::test]
async fn test_sqlite_text_is_bound_not_interpolated() {
    let repo = setup_test_repo().await;

    let name = "Robert'); DROP TABLE Rides;--";
    let rides = repo.create_ride(&create_mock_ride(name)).await.unwrap();
    assert_eq!(rides[0].rider_name, name);

    let listed = repo.list_rides(1).await.unwrap();
    assert_eq!(listed.len(), 1);
}

// the same rides survive reconnecting to an on-disk database
#[tokio::test]
async fn test_sqlite_on_disk_database_persists() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let config = RidesConfig {
        database_url: format!("sqlite://{}", dir.path().join("rides.db").display()),
        ..RidesConfig::in_memory()
    };

    {
        let pool = init_db_pool(&config).await.expect("Should create database");
        let repo = SqliteRideRepository::new(pool.clone());
        repo.create_ride(&create_mock_ride("persisted")).await.unwrap();
        pool.close().await;
    }

    let pool = init_db_pool(&config).await.expect("Should reopen database");
    let repo = SqliteRideRepository::new(pool);
    let rides = repo.get_ride_by_id(1).await.unwrap();
    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].rider_name, "persisted");
}

// a failed insert reports what went wrong without echoing the rider's name
#[tokio::test]
async fn test_sqlite_insert_error_omits_rider_name() {
    let pool = init_db_pool(&RidesConfig::in_memory())
        .await
        .expect("Failed to create in-memory database");
    sqlx::query("DROP TABLE Rides").execute(&pool).await.unwrap();
    let repo = SqliteRideRepository::new(pool);

    let err = repo
        .create_ride(&create_mock_ride("Very Private Person"))
        .await
        .expect_err("Insert should fail without the table");

    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to insert ride"), "{}", chain);
    assert!(!chain.contains("Very Private Person"), "{}", chain);
}
