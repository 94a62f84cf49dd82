use crate::AppState;
use axum::{routing::get, Router};

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> &'static str {
    "Healthy"
}
