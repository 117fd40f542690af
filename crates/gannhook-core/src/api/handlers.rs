//! API handlers for the HTTP REST API

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::ingest::Ingestor;
use crate::store::QueryResult;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Ingestion pipeline (owns the alert store)
    pub ingestor: Ingestor,
    /// Process start time, for uptime reporting
    pub started_at: Instant,
    /// Maximum alerts returned per query
    pub page_size: usize,
}

impl AppState {
    /// Create the shared state
    pub fn new(ingestor: Ingestor, page_size: usize) -> Self {
        Self {
            ingestor,
            started_at: Instant::now(),
            page_size,
        }
    }
}

/// Uniform boundary error: any handler failure surfaces as a generic 500.
/// The error detail goes to the log, never to the client.
pub struct ApiError(crate::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request handling failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error"})),
        )
            .into_response()
    }
}

impl<E: Into<crate::Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Status response
#[derive(Serialize)]
pub struct StatusResponse {
    /// Liveness string
    pub status: String,
    /// Current store size
    pub alerts_count: usize,
    /// Process uptime in seconds
    pub uptime: f64,
    /// Current time, RFC 3339
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Status endpoint
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    Ok(Json(StatusResponse {
        status: "Gann Trading Bot Webhook Server Running".to_string(),
        alerts_count: state.ingestor.store().len(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: chrono::Utc::now(),
    }))
}

/// Webhook acknowledgement response
#[derive(Serialize)]
pub struct WebhookResponse {
    /// Always true; failures surface as a 500 instead
    pub success: bool,
    /// Human-readable acknowledgement
    pub message: String,
    /// Id of the stored alert
    #[serde(rename = "alertId")]
    pub alert_id: u64,
}

/// Ingest a webhook notification for a bot
pub async fn receive_webhook(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let alert_id = state.ingestor.ingest(&bot_id, payload);

    Ok(Json(WebhookResponse {
        success: true,
        message: "Webhook received successfully".to_string(),
        alert_id,
    }))
}

/// List recent alerts across all bots
pub async fn list_alerts(State(state): State<AppState>) -> Result<Json<QueryResult>, ApiError> {
    Ok(Json(state.ingestor.store().query(None, state.page_size)))
}

/// List recent alerts for one bot
pub async fn list_bot_alerts(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
) -> Result<Json<QueryResult>, ApiError> {
    Ok(Json(
        state.ingestor.store().query(Some(&bot_id), state.page_size),
    ))
}
