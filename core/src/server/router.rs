//! Router construction with all route groups.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers::{classify, health, history, keywords};
use super::middleware::log_request;
use super::state::SharedState;

/// Build the complete router with all REST routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // --- System ---
        .route("/health", get(health::health))
        .route("/info", get(health::info))
        // --- Classification ---
        .route("/classify", post(classify::classify))
        .route("/keywords", get(keywords::get_keywords))
        // --- Session history ---
        .route("/history", get(history::list_history))
        // --- Middleware ---
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
