//! Admin handlers: login, logout, session.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;

use crate::dto::request::LoginRequest;
use crate::dto::response::{OkResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<OkResponse>), ApiError> {
    let issued = state
        .session_manager
        .clone()
        .login_blocking(req.username, req.password, req.remember, Utc::now())
        .await?;

    let cookie = Cookie::build((state.config.auth.cookie_name.clone(), issued.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.auth.cookie_secure || is_https(&headers))
        .max_age(time::Duration::seconds(issued.max_age.num_seconds()));

    Ok((jar.add(cookie), Json(OkResponse::ok())))
}

/// GET /admin/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let cookie = Cookie::build(state.config.auth.cookie_name.clone()).path("/");
    (jar.remove(cookie), Redirect::to("/"))
}

/// GET /admin/session
pub async fn session(admin: AdminUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        ok: true,
        username: admin.username.clone(),
        expires_at: admin.expires_at,
    })
}

/// Whether the request reached the proxy over HTTPS.
fn is_https(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.split(',').next().unwrap_or("").trim().eq_ignore_ascii_case("https"))
}
