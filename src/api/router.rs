use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::evaluate;
use super::health;
use super::state::AppState;

/// Create the application router
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Evaluation endpoint
        .route("/evaluate", post(evaluate::evaluate))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
