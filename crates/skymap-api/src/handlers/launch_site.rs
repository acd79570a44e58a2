//! Launch site handlers.

use axum::Json;
use axum::extract::State;

use skymap_entity::{LaunchSite, LaunchSiteDraft};
use skymap_service::LaunchSiteList;

use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// GET /api/launchsites
pub async fn list_launch_sites(State(state): State<AppState>) -> Json<LaunchSiteList> {
    Json(state.launch_site_service.list().await)
}

/// POST /api/launchsites
pub async fn upsert_launch_site(
    State(state): State<AppState>,
    _admin: AdminUser,
    JsonBody(draft): JsonBody<LaunchSiteDraft>,
) -> Result<Json<LaunchSite>, ApiError> {
    let site = state.launch_site_service.upsert(draft).await?;
    Ok(Json(site))
}
