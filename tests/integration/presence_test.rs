//! Integration tests for presence, stats, and health.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_ping_then_stats() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/presence", Some(serde_json::json!({"sid": "a"})), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["online"], 1);

    let response = app
        .request("POST", "/api/presence", Some(serde_json::json!({"sid": "b"})), None)
        .await;
    assert_eq!(response.body["online"], 2);

    let stats = app.request("GET", "/api/stats", None, None).await;
    assert_eq!(stats.status, StatusCode::OK);
    assert!(stats.body["online"].as_u64().unwrap() >= 1);
    assert!(stats.body["updated_at"].is_null());
}

#[tokio::test]
async fn test_empty_sid_is_noop() {
    let app = TestApp::new().await;

    for body in [Some(serde_json::json!({"sid": ""})), Some(serde_json::json!({})), None] {
        let response = app.request("POST", "/api/presence", body, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["online"], 0);
    }
}

#[tokio::test]
async fn test_numeric_sid_counts() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/presence", Some(serde_json::json!({"sid": 12345})), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["online"], 1);

    let response = app
        .request("POST", "/api/presence", Some(serde_json::json!({"sid": "12345"})), None)
        .await;
    assert_eq!(response.body["online"], 1);
}

#[tokio::test]
async fn test_stats_report_latest_target_change() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let target = app
        .create_target(&cookie, serde_json::json!({"type": "fpv", "lat": 1, "lng": 1}))
        .await;

    let stats = app.request("GET", "/api/stats", None, None).await;
    assert_eq!(stats.body["updated_at"], target["updated_at"]);
}

#[tokio::test]
async fn test_health_reports_backend() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["storage"], "json");
}
