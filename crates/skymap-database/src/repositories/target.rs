//! Target repository implementation.

use sqlx::PgPool;

use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::Target;

const COLUMNS: &str = "id, type, lat, lng, direction, note, speed_kmh, dest_lat, dest_lng, \
                       active, created_at, updated_at";

/// Repository for target rows.
#[derive(Debug, Clone)]
pub struct TargetRepository {
    pool: PgPool,
}

impl TargetRepository {
    /// Create a new target repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all targets, most recently updated first.
    pub async fn find_all(&self) -> AppResult<Vec<Target>> {
        sqlx::query_as::<_, Target>(&format!(
            "SELECT {COLUMNS} FROM targets ORDER BY updated_at DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to list targets", e))
    }

    /// Find a target by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Target>> {
        sqlx::query_as::<_, Target>(&format!("SELECT {COLUMNS} FROM targets WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to find target", e))
    }

    /// Insert or fully replace a target. `created_at` is never overwritten.
    pub async fn upsert(&self, target: &Target) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO targets (id, type, lat, lng, direction, note, speed_kmh, dest_lat, dest_lng, active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             ON CONFLICT (id) DO UPDATE SET \
                type = EXCLUDED.type, lat = EXCLUDED.lat, lng = EXCLUDED.lng, \
                direction = EXCLUDED.direction, note = EXCLUDED.note, \
                speed_kmh = EXCLUDED.speed_kmh, dest_lat = EXCLUDED.dest_lat, \
                dest_lng = EXCLUDED.dest_lng, active = EXCLUDED.active, \
                updated_at = EXCLUDED.updated_at",
        )
        .bind(&target.id)
        .bind(&target.kind)
        .bind(target.lat)
        .bind(target.lng)
        .bind(target.direction)
        .bind(&target.note)
        .bind(target.speed_kmh)
        .bind(target.dest_lat)
        .bind(target.dest_lng)
        .bind(target.active)
        .bind(target.created_at)
        .bind(target.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to save target", e))?;
        Ok(())
    }

    /// Delete a target. Returns `true` if a row was removed.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM targets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::database("Failed to delete target", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every target. Returns the number of rows removed.
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM targets")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::database("Failed to clear targets", e)
            })?;
        Ok(result.rows_affected())
    }
}
