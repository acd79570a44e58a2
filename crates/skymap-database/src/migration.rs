//! Idempotent schema bootstrap.
//!
//! The schema is small enough to be created in place at startup. Columns that
//! were added after the first deployments are re-applied with
//! `ADD COLUMN IF NOT EXISTS`, so older databases are upgraded on boot.

use sqlx::PgPool;
use tracing::info;

use skymap_core::error::AppError;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS targets (
        id TEXT PRIMARY KEY,
        type TEXT NOT NULL,
        lat DOUBLE PRECISION NOT NULL,
        lng DOUBLE PRECISION NOT NULL,
        direction INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )"#,
    "ALTER TABLE targets ADD COLUMN IF NOT EXISTS note TEXT NOT NULL DEFAULT ''",
    "ALTER TABLE targets ADD COLUMN IF NOT EXISTS speed_kmh DOUBLE PRECISION NOT NULL DEFAULT 0",
    "ALTER TABLE targets ADD COLUMN IF NOT EXISTS dest_lat DOUBLE PRECISION",
    "ALTER TABLE targets ADD COLUMN IF NOT EXISTS dest_lng DOUBLE PRECISION",
    "ALTER TABLE targets ADD COLUMN IF NOT EXISTS active BOOLEAN NOT NULL DEFAULT TRUE",
    "ALTER TABLE targets ADD COLUMN IF NOT EXISTS updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()",
    "CREATE INDEX IF NOT EXISTS idx_targets_updated_at ON targets (updated_at DESC)",
    r#"CREATE TABLE IF NOT EXISTS launchsites (
        name TEXT PRIMARY KEY,
        lat DOUBLE PRECISION,
        lng DOUBLE PRECISION,
        active BOOLEAN NOT NULL DEFAULT TRUE
    )"#,
    "ALTER TABLE launchsites ADD COLUMN IF NOT EXISTS updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()",
];

/// Create tables and add any missing columns.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Ensuring database schema...");

    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::database(
                format!("Failed to apply schema statement: {e}"),
                e,
            )
        })?;
    }

    info!(statements = SCHEMA.len(), "Database schema is up to date");
    Ok(())
}
