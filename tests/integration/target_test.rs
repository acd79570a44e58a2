//! Integration tests for target CRUD.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_list_is_public_and_empty() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/targets", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["targets"], serde_json::json!([]));
    assert!(response.body["updated_at"].is_null());
}

#[tokio::test]
async fn test_create_normalizes_input() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let target = app
        .create_target(
            &cookie,
            serde_json::json!({
                "type": "  Shahed ",
                "lat": "48.1234567",
                "lng": 35.5,
                "direction": 370,
                "note": "n".repeat(200),
                "speed_kmh": "180.26",
            }),
        )
        .await;

    assert_eq!(target["type"], "shahed");
    assert_eq!(target["direction"], 10);
    assert_eq!(target["lat"], 48.123457);
    assert_eq!(target["speed_kmh"], 180.3);
    assert_eq!(target["note"].as_str().unwrap().chars().count(), 140);
    assert_eq!(target["active"], true);
    assert!(target["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(target["created_at"], target["updated_at"]);
}

#[tokio::test]
async fn test_negative_direction_wraps() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let target = app
        .create_target(
            &cookie,
            serde_json::json!({"type": "cruise", "lat": 1, "lng": 1, "direction": -5}),
        )
        .await;
    assert_eq!(target["direction"], 355);
}

#[tokio::test]
async fn test_two_creates_get_distinct_ids() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    let body = serde_json::json!({"type": "fpv", "lat": 1, "lng": 1});

    let a = app.create_target(&cookie, body.clone()).await;
    let b = app.create_target(&cookie, body).await;
    assert_ne!(a["id"], b["id"]);

    let list = app.request("GET", "/api/targets", None, None).await;
    assert_eq!(list.body["targets"].as_array().unwrap().len(), 2);
    assert!(list.body["updated_at"].is_string());
}

#[tokio::test]
async fn test_invalid_input_is_bad_request() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let bodies = [
        serde_json::json!({"type": "bad-type", "lat": 1, "lng": 1}),
        serde_json::json!({"type": "fpv", "lat": 91, "lng": 1}),
        serde_json::json!({"type": "fpv", "lat": 1, "lng": 1, "speed_kmh": -3}),
        serde_json::json!({"type": "fpv", "lat": 1, "lng": 1, "dest_lat": 2}),
        serde_json::json!({"type": "fpv", "lat": "north", "lng": 1}),
        serde_json::json!({"type": "fpv"}),
    ];

    for body in bodies {
        let response = app
            .request("POST", "/api/targets", Some(body.clone()), Some(&cookie))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "accepted {body}");
        assert_eq!(response.body["ok"], false);
    }

    let list = app.request("GET", "/api/targets", None, None).await;
    assert_eq!(list.body["targets"], serde_json::json!([]));
}

#[tokio::test]
async fn test_update_round_trip() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    app.create_target(&cookie, serde_json::json!({"type": "fpv", "lat": 1, "lng": 1}))
        .await;
    app.create_target(&cookie, serde_json::json!({"type": "cruise", "lat": 2, "lng": 2}))
        .await;

    let list = app.request("GET", "/api/targets", None, None).await;
    let picked = list.body["targets"][1].clone();
    let id = picked["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/api/targets/{id}"),
            Some(serde_json::json!({
                "type": "cruise",
                "lat": 50.45,
                "lng": 30.52,
                "dest_lat": 49.0,
                "dest_lng": 32.0,
                "active": false,
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app.request("GET", "/api/targets", None, None).await;
    let targets = list.body["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 2);

    let updated = targets.iter().find(|t| t["id"] == id).unwrap();
    assert_eq!(updated["lat"], 50.45);
    assert_eq!(updated["lng"], 30.52);
    assert_eq!(updated["dest_lat"], 49.0);
    assert_eq!(updated["active"], false);
    assert_eq!(updated["created_at"], picked["created_at"]);
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/targets/does-not-exist",
            Some(serde_json::json!({"type": "fpv", "lat": 1, "lng": 1})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let a = app
        .create_target(&cookie, serde_json::json!({"type": "fpv", "lat": 1, "lng": 1}))
        .await;
    app.create_target(&cookie, serde_json::json!({"type": "fpv", "lat": 2, "lng": 2}))
        .await;
    let path = format!("/api/targets/{}", a["id"].as_str().unwrap());

    let response = app.request("DELETE", &path, None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);

    let response = app.request("DELETE", &path, None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/targets", None, None).await;
    assert_eq!(list.body["targets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_all() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    for i in 0..3 {
        app.create_target(&cookie, serde_json::json!({"type": "fpv", "lat": i, "lng": i}))
            .await;
    }

    let response = app.request("DELETE", "/api/targets", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);

    let list = app.request("GET", "/api/targets", None, None).await;
    assert_eq!(list.body["targets"], serde_json::json!([]));
}

#[tokio::test]
async fn test_targets_persist_to_document() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let target = app
        .create_target(&cookie, serde_json::json!({"type": "fpv", "lat": 1, "lng": 1}))
        .await;

    let raw = std::fs::read_to_string(app.data_dir.path().join("targets.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["id"], target["id"]);
    assert!(!app.data_dir.path().join("targets.json.tmp").exists());
}
