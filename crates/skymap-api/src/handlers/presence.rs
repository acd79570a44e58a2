//! Presence ping and public stats.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use chrono::Utc;

use crate::dto::request::PresenceRequest;
use crate::dto::response::{PresenceResponse, StatsResponse};
use crate::state::AppState;

/// POST /api/presence
///
/// A missing or unparsable body counts as an empty session id.
pub async fn ping(State(state): State<AppState>, body: Bytes) -> Json<PresenceResponse> {
    let request: PresenceRequest = serde_json::from_slice(&body).unwrap_or_default();
    let online = state.presence.ping(&request.sid);
    Json(PresenceResponse { online })
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let updated_at = state.target_service.last_updated().await;
    let stats = state.presence.stats(Utc::now(), updated_at);
    Json(StatsResponse {
        online: stats.online,
        updated_at: stats.updated_at,
    })
}
