//! Route definitions for the SkyMap HTTP API.
//!
//! Map data lives under `/api`, admin session endpoints under `/admin`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(target_routes())
        .merge(launch_site_routes())
        .merge(presence_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", admin_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Target list and admin CRUD
fn target_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/targets",
            get(handlers::target::list_targets)
                .post(handlers::target::create_target)
                .delete(handlers::target::clear_targets),
        )
        .route(
            "/targets/{id}",
            post(handlers::target::update_target).delete(handlers::target::delete_target),
        )
}

/// Launch site list and admin upsert
fn launch_site_routes() -> Router<AppState> {
    Router::new().route(
        "/launchsites",
        get(handlers::launch_site::list_launch_sites)
            .post(handlers::launch_site::upsert_launch_site),
    )
}

/// Viewer presence and public stats
fn presence_routes() -> Router<AppState> {
    Router::new()
        .route("/presence", post(handlers::presence::ping))
        .route("/stats", get(handlers::presence::stats))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Admin login, logout, and session check
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::admin::login))
        .route("/logout", get(handlers::admin::logout))
        .route("/session", get(handlers::admin::session))
}
