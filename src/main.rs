use crate::config::RidesConfig;
use crate::database::sqlite::SqliteRideRepository;
use crate::database::RideRepository;
use std::sync::Arc;

pub mod config;
mod database;
mod db;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub rides: Arc<dyn RideRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = RidesConfig::from_env()?;

    // connect to our db, creating the Rides table on first run
    let pool = db::init_db_pool(&config).await?;
    tracing::info!(url = %config.database_url, "Database ready");

    let app_state = AppState {
        rides: Arc::new(SqliteRideRepository::new(pool.clone())),
    };

    let app = features::app_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
