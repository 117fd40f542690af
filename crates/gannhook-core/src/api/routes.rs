//! API routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health / status
        .route("/", get(handlers::status))
        // Webhook ingestion
        .route("/webhook/:bot_id", post(handlers::receive_webhook))
        // Alert queries (bot id segment optional)
        .route("/alerts", get(handlers::list_alerts))
        .route("/alerts/:bot_id", get(handlers::list_bot_alerts))
        .with_state(state)
}
