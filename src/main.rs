//! SkyMap Server: map annotation backend
//!
//! Main entry point that wires all crates together and starts the server.

mod cli;

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use skymap_api::{AppState, build_router};
use skymap_core::config::AppConfig;
use skymap_core::error::{AppError, ErrorKind};
use skymap_database::{DatabasePool, PgMarkerStore};
use skymap_storage::{JsonFileStore, MarkerStore};

use cli::{Cli, Commands, ServeArgs};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let env = cli.environment();

    let args = match cli.command {
        Some(Commands::HashPassword(args)) => {
            println!(
                "{}",
                skymap_auth::hash_password(&args.password, &args.salt, args.iterations)
            );
            return;
        }
        Some(Commands::Serve(args)) => args,
        None => ServeArgs::default(),
    };

    let mut config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SkyMap v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Persistence backend ──────────────────────────────
    let (store, db_pool): (Arc<dyn MarkerStore>, Option<DatabasePool>) = if config.uses_database()
    {
        let pool = DatabasePool::connect(&config.database).await?;
        skymap_database::migration::run_migrations(pool.pool()).await?;
        (Arc::new(PgMarkerStore::new(pool.pool().clone())), Some(pool))
    } else {
        tracing::info!(data_dir = %config.storage.data_dir, "Using JSON document storage");
        (Arc::new(JsonFileStore::new(&config.storage).await?), None)
    };

    // ── Step 2: Application state ────────────────────────────────
    let state = AppState::new(config.clone(), store);

    if let Err(e) = state.launch_site_service.seed_defaults().await {
        tracing::warn!(error = %e, "Failed to seed default launch sites");
    }

    if state.session_manager.uses_dev_secret() {
        tracing::warn!("SESSION_SECRET is not set; sessions are signed with the development secret");
    }
    if state.session_manager.password_mode() == "dev-default" {
        tracing::warn!("No admin password configured; the development password is active");
    }
    tracing::info!(
        backend = state.store.backend(),
        admin = state.session_manager.admin_username(),
        password_mode = state.session_manager.password_mode(),
        "Services initialized"
    );

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    tracing::info!("Listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;
        }
        _ = async {
            let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Open connections did not drain in time");
        }
    }

    // ── Step 4: Release resources ────────────────────────────────
    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("SkyMap server shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
