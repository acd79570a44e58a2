//! Integration tests for launch sites.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_defaults_are_seeded() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/launchsites", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let sites = response.body["sites"].as_array().unwrap();
    assert_eq!(sites.len(), 19);
    assert!(sites.iter().all(|s| s["lat"].is_null() && s["active"] == true));
    assert!(response.body["updated_at"].is_string());
}

#[tokio::test]
async fn test_upsert_existing_name_updates_in_place() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/launchsites",
            Some(serde_json::json!({"name": "Yeysk", "lat": 46.68, "lng": 38.21, "active": true})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Yeysk");
    assert_eq!(response.body["lat"], 46.68);

    let list = app.request("GET", "/api/launchsites", None, None).await;
    let sites = list.body["sites"].as_array().unwrap();
    assert_eq!(sites.len(), 19);
    let yeysk = sites.iter().find(|s| s["name"] == "Yeysk").unwrap();
    assert_eq!(yeysk["lng"], 38.21);
}

#[tokio::test]
async fn test_upsert_new_name_appends() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/launchsites",
            Some(serde_json::json!({"name": "Engels", "active": false})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["active"], false);

    let list = app.request("GET", "/api/launchsites", None, None).await;
    assert_eq!(list.body["sites"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_blank_name_is_bad_request() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    for body in [
        serde_json::json!({"name": "  "}),
        serde_json::json!({}),
        serde_json::json!({"name": "x".repeat(81)}),
    ] {
        let response = app
            .request("POST", "/api/launchsites", Some(body), Some(&cookie))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let list = app.request("GET", "/api/launchsites", None, None).await;
    assert_eq!(list.body["sites"].as_array().unwrap().len(), 19);
}

#[tokio::test]
async fn test_upsert_requires_admin() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/launchsites",
            Some(serde_json::json!({"name": "Kursk", "lat": 51.7, "lng": 36.2})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
