use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Events
        .route("/events", get(handlers::get_events))
        .route("/events", post(handlers::create_event))
        // Recommendations
        .route("/recommend", post(handlers::recommend))
        // Embeddings
        .route("/generate-embedding", post(handlers::generate_embedding))
        .route("/backfill", post(handlers::run_backfill))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
