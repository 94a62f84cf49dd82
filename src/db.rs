use crate::config::RidesConfig;
use anyhow::{Context, Result};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{Sqlite, SqlitePoolOptions};
use sqlx::Pool;

// connect to the configured database, creating it (and the Rides table) if needed
pub async fn init_db_pool(config: &RidesConfig) -> Result<Pool<Sqlite>> {
    // verify db exists. in-memory databases always "exist"
    if !config.database_url.contains(":memory:")
        && !Sqlite::database_exists(&config.database_url)
            .await
            .unwrap_or(false)
    {
        tracing::info!(url = %config.database_url, "Database not found, creating...");
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
