//! Target handlers: list is public, mutations require an admin session.

use axum::Json;
use axum::extract::{Path, State};

use skymap_entity::{Target, TargetDraft};
use skymap_service::TargetList;

use crate::dto::response::OkResponse;
use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// GET /api/targets
pub async fn list_targets(State(state): State<AppState>) -> Json<TargetList> {
    Json(state.target_service.list().await)
}

/// POST /api/targets
pub async fn create_target(
    State(state): State<AppState>,
    _admin: AdminUser,
    JsonBody(draft): JsonBody<TargetDraft>,
) -> Result<Json<Target>, ApiError> {
    let target = state.target_service.create(draft).await?;
    Ok(Json(target))
}

/// POST /api/targets/{id}
pub async fn update_target(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<TargetDraft>,
) -> Result<Json<Target>, ApiError> {
    let target = state.target_service.update(&id, draft).await?;
    Ok(Json(target))
}

/// DELETE /api/targets/{id}
pub async fn delete_target(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    state.target_service.delete(&id).await?;
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/targets
pub async fn clear_targets(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<OkResponse>, ApiError> {
    state.target_service.clear().await?;
    Ok(Json(OkResponse::ok()))
}
