//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use skymap_api::{AppState, build_router};
use skymap_core::config::AppConfig;
use skymap_storage::JsonFileStore;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state (shared with the router)
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
    /// Data directory, removed on drop
    pub data_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty JSON store
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.storage.data_dir = data_dir.path().to_string_lossy().into_owned();
        config.auth.admin_password = Some(ADMIN_PASSWORD.to_string());
        config.auth.session_secret = Some("integration-test-secret".to_string());

        let store = JsonFileStore::new(&config.storage)
            .await
            .expect("Failed to init store");

        let state = AppState::new(config.clone(), Arc::new(store));
        state
            .launch_site_service
            .seed_defaults()
            .await
            .expect("Failed to seed launch sites");

        let router = build_router(state.clone());

        Self {
            router,
            state,
            config,
            data_dir,
        }
    }

    /// Log in as the admin and return the `Cookie` header value to replay
    pub async fn login(&self) -> String {
        let response = self
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

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.cookie().expect("No session cookie in login response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
            location,
        }
    }

    /// Create a target through the API and return its JSON
    pub async fn create_target(&self, cookie: &str, body: Value) -> Value {
        let response = self
            .request("POST", "/api/targets", Some(body), Some(cookie))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` headers
    pub set_cookie: Vec<String>,
    /// `Location` header, if any
    pub location: Option<String>,
}

impl TestResponse {
    /// The first `Set-Cookie` as a `name=value` pair ready for a `Cookie` header
    pub fn cookie(&self) -> Option<String> {
        self.set_cookie
            .first()
            .and_then(|c| c.split(';').next())
            .map(|pair| pair.trim().to_string())
    }
}
