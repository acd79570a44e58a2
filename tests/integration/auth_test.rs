//! Integration tests for admin login, session cookies, and logout.

mod helpers;

use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Request, StatusCode, header};

use helpers::{ADMIN_PASSWORD, ADMIN_USERNAME, TestApp};

#[tokio::test]
async fn test_login_sets_http_only_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);

    let cookie = &response.set_cookie[0];
    assert!(cookie.starts_with("skymap_admin="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=21600"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_remember_me_extends_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD,
                "remember": true,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie[0].contains("Max-Age=2592000"));
}

#[tokio::test]
async fn test_cookie_marked_secure_behind_https_proxy() {
    let app = TestApp::new().await;

    let req = Request::builder()
        .method("POST")
        .uri("/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-proto", "https")
        .body(Body::from(
            serde_json::json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD})
                .to_string(),
        ))
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie[0].contains("Secure"));
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": "wrong",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["ok"], false);
    assert!(response.body["error"].is_string());
    assert!(response.set_cookie.is_empty());
}

#[tokio::test]
async fn test_login_wrong_username() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "username": "root",
                "password": ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_replay_authorizes_protected_call() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/targets",
            Some(serde_json::json!({"type": "shahed", "lat": 48.5, "lng": 35.0})),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/admin/session", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], ADMIN_USERNAME);
}

#[tokio::test]
async fn test_protected_calls_require_session() {
    let app = TestApp::new().await;

    let calls = [
        ("POST", "/api/targets"),
        ("POST", "/api/targets/t1"),
        ("DELETE", "/api/targets/t1"),
        ("DELETE", "/api/targets"),
        ("POST", "/api/launchsites"),
        ("GET", "/admin/session"),
    ];

    for (method, path) in calls {
        let response = app
            .request(
                method,
                path,
                Some(serde_json::json!({"type": "fpv", "lat": 1, "lng": 1, "name": "Kursk"})),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path} was not protected"
        );
        assert_eq!(response.body["ok"], false);
    }
}

#[tokio::test]
async fn test_expired_cookie_rejected() {
    let app = TestApp::new().await;

    let issued = app
        .state
        .session_manager
        .login(
            ADMIN_USERNAME,
            ADMIN_PASSWORD,
            false,
            Utc::now() - Duration::hours(7),
        )
        .unwrap();
    let cookie = format!("{}={}", app.config.auth.cookie_name, issued.token);

    let response = app.request("DELETE", "/api/targets", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_cookie_rejected() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    // Change a character in the middle of the signature. The last one only
    // carries padding bits and would fail base64 decoding instead.
    let dot = cookie.rfind('.').unwrap();
    let mut chars: Vec<char> = cookie.chars().collect();
    let mid = dot + (cookie.len() - dot) / 2;
    chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();
    assert_ne!(tampered, cookie);

    let response = app.request("DELETE", "/api/targets", None, Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("DELETE", "/api/targets", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_session_header_alternative() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    let token = cookie.split_once('=').unwrap().1;

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/targets")
        .header("x-admin-session", token)
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.send(req).await.status, StatusCode::OK);

    // The password itself is never accepted in place of a token.
    let req = Request::builder()
        .method("DELETE")
        .uri("/api/targets")
        .header("x-admin-session", ADMIN_PASSWORD)
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.send(req).await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie_and_redirects() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app.request("GET", "/admin/logout", None, Some(&cookie)).await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location.as_deref(), Some("/"));
    let cleared = &response.set_cookie[0];
    assert!(cleared.starts_with("skymap_admin="));
    assert!(cleared.contains("Max-Age=0"));
}
