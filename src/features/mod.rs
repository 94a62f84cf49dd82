pub mod health;
pub mod rides;

use crate::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

// the full http surface, where features are composed
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(health::health_router())
        .merge(rides::rides_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
