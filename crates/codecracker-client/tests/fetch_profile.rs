//! Round-trip tests for `ApiClient` against an in-process HTTP server.
//!
//! The mock server mirrors the statistics API's behaviour:
//! - `POST /api/profile` answers per username (found, not found, rate limited)
//! - `GET /health` reports `{"status": "healthy"}`

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use codecracker_client::{ApiClient, ProfileSource};
use codecracker_core::{Error, Platform, Query};
use serde_json::{json, Value};

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn profile_handler(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if content_type != "application/json" {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(json!({"error": "expected JSON"})),
        );
    }

    match (body["platform"].as_str(), body["username"].as_str()) {
        (Some("leetcode"), Some("alice")) => (
            StatusCode::OK,
            Json(json!({
                "username": "alice",
                "rating": 1500,
                "solved": 120,
                "rank": 5000,
                "languageStats": {"Python": 80, "Java": 40}
            })),
        ),
        (Some(_), Some("ghost")) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "User not found"})),
        ),
        (Some(_), Some("limited")) => (StatusCode::OK, Json(json!({"error": "Rate limited"}))),
        (Some("codechef"), Some(name)) => (
            StatusCode::OK,
            Json(json!({
                "username": name,
                "rating": "N/A",
                "solved": 7,
                "rank": "N/A",
                "languageStats": {}
            })),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Platform and username are required"})),
        ),
    }
}

fn api_router() -> Router {
    Router::new()
        .route("/api/profile", post(profile_handler))
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
}

fn query(platform: Platform, username: &str) -> Query {
    Query::new(Some(platform), username).unwrap()
}

#[tokio::test]
async fn test_fetch_profile_success() {
    let base = spawn_server(api_router()).await;
    let client = ApiClient::new(&base, None).unwrap();

    let stats = client
        .fetch_profile(&query(Platform::LeetCode, "alice"))
        .await
        .unwrap();

    assert_eq!(stats.username_display(), "alice");
    assert_eq!(stats.rating_display(), "1500");
    assert_eq!(stats.solved_display(), "120");
    assert_eq!(stats.rank_display(), "5000");
    assert_eq!(stats.language_stats.len(), 2);
}

#[tokio::test]
async fn test_fetch_profile_not_found_uses_error_field() {
    let base = spawn_server(api_router()).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client
        .fetch_profile(&query(Platform::CodeForces, "ghost"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { status: Some(404), .. }));
    assert_eq!(err.user_message(), "User not found");
}

#[tokio::test]
async fn test_fetch_profile_error_field_with_ok_status() {
    let base = spawn_server(api_router()).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client
        .fetch_profile(&query(Platform::LeetCode, "limited"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Rate limited");
}

#[tokio::test]
async fn test_fetch_profile_text_statistics() {
    let base = spawn_server(api_router()).await;
    let client = ApiClient::new(&base, None).unwrap();

    let stats = client
        .fetch_profile(&query(Platform::CodeChef, "chef"))
        .await
        .unwrap();

    assert_eq!(stats.rating_display(), "N/A");
    assert_eq!(stats.rank_display(), "N/A");
    assert!(stats.language_stats.is_empty());
}

#[tokio::test]
async fn test_fetch_profile_non_json_body_is_transport_error() {
    let router = Router::new().route(
        "/api/profile",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base = spawn_server(router).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client
        .fetch_profile(&query(Platform::LeetCode, "alice"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn test_fetch_profile_connection_refused_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr), None).unwrap();
    let err = client
        .fetch_profile(&query(Platform::LeetCode, "alice"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server(api_router()).await;
    let client = ApiClient::new(&base, None).unwrap();

    let health = client.health().await.unwrap();
    assert!(health.is_healthy());
}

#[tokio::test]
async fn test_health_check_missing_endpoint() {
    let base = spawn_server(Router::new()).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: Some(404), .. }));
}
