//! End-to-end tests for the HTTP API

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use gannhook::api::{create_router, AppState};
use gannhook::ingest::Ingestor;
use gannhook::store::AlertStore;

fn app() -> Router {
    let ingestor = Ingestor::new(AlertStore::new(50));
    create_router(AppState::new(ingestor, 20))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_webhook(app: &Router, bot_id: &str, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/webhook/{bot_id}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Gann Trading Bot Webhook Server Running");
    assert_eq!(body["alerts_count"], 0);
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_webhook_roundtrip_fifty_percent() {
    let app = app();

    let payload = json!({"message": "50% retracement hit"});
    let (status, body) = post_webhook(&app, "bot-1", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Webhook received successfully");
    let alert_id = body["alertId"].as_u64().unwrap();

    let (status, body) = get(&app, "/alerts/bot-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let alert = &body["alerts"][0];
    assert_eq!(alert["id"].as_u64().unwrap(), alert_id);
    assert_eq!(alert["botId"], "bot-1");
    assert_eq!(alert["type"], "FIFTY_PERCENT");
    assert_eq!(alert["priority"], "MEDIUM");
    assert_eq!(alert["processed"], true);
    assert_eq!(alert["payload"], payload);
}

#[tokio::test]
async fn test_alerts_filtered_by_bot() {
    let app = app();

    post_webhook(&app, "bot-1", &json!({"message": "Volume Climax reached"})).await;
    post_webhook(&app, "bot-2", &json!({"message": "section change"})).await;
    post_webhook(&app, "bot-1", &json!({"note": "no message field"})).await;

    let (_, body) = get(&app, "/alerts/bot-1").await;
    assert_eq!(body["total"], 2);
    let alerts = body["alerts"].as_array().unwrap();
    assert!(alerts.iter().all(|a| a["botId"] == "bot-1"));
    // Most recent first
    assert_eq!(alerts[0]["type"], "GENERAL");
    assert_eq!(alerts[1]["type"], "VOLUME_CLIMAX");

    let (_, body) = get(&app, "/alerts").await;
    assert_eq!(body["total"], 3);

    let (_, body) = get(&app, "/alerts/bot-3").await;
    assert_eq!(body["total"], 0);
    assert!(body["alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_alerts_page_limited_to_twenty() {
    let app = app();

    for n in 0..25 {
        post_webhook(&app, "bot-1", &json!({"message": format!("tick {n}")})).await;
    }

    let (_, body) = get(&app, "/alerts/bot-1").await;
    assert_eq!(body["alerts"].as_array().unwrap().len(), 20);
    assert_eq!(body["total"], 25);

    let (_, body) = get(&app, "/").await;
    assert_eq!(body["alerts_count"], 25);
}

#[tokio::test]
async fn test_unmatched_message_classifies_general() {
    let app = app();

    let (_, body) = post_webhook(&app, "bot-1", &json!({"message": "moving average cross"})).await;
    assert_eq!(body["success"], true);

    let (_, body) = get(&app, "/alerts/bot-1").await;
    let alert = &body["alerts"][0];
    assert_eq!(alert["type"], "GENERAL");
    assert!(alert.get("priority").is_none());
    assert_eq!(alert["processed"], true);
}

#[tokio::test]
async fn test_malformed_body_rejected_at_boundary() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook/bot-1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());

    // The store is untouched by the failed request.
    let (_, body) = get(&app, "/").await;
    assert_eq!(body["alerts_count"], 0);
}
