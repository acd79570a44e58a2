//! `AdminUser` extractor: pulls the signed session token from the cookie
//! (or the `X-Admin-Session` header), verifies it, and injects the session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use chrono::Utc;

use skymap_auth::AdminSession;
use skymap_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying a session token for scripted access.
pub const ADMIN_SESSION_HEADER: &str = "x-admin-session";

/// Verified admin session available in handlers.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminSession);

impl std::ops::Deref for AdminUser {
    type Target = AdminSession;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(&state.config.auth.cookie_name)
            .map(|c| c.value().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get(ADMIN_SESSION_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.trim().to_string())
            })
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::authentication("Admin login required"))?;

        let session = state.session_manager.authenticate(&token, Utc::now())?;
        Ok(AdminUser(session))
    }
}
