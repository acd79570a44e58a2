//! Launch site repository implementation.

use sqlx::PgPool;

use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::LaunchSite;

/// Repository for launch site rows.
#[derive(Debug, Clone)]
pub struct LaunchSiteRepository {
    pool: PgPool,
}

impl LaunchSiteRepository {
    /// Create a new launch site repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all launch sites by name.
    pub async fn find_all(&self) -> AppResult<Vec<LaunchSite>> {
        sqlx::query_as::<_, LaunchSite>(
            "SELECT name, lat, lng, active, updated_at FROM launchsites ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::database("Failed to list launch sites", e)
        })
    }

    /// Find a launch site by name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<LaunchSite>> {
        sqlx::query_as::<_, LaunchSite>(
            "SELECT name, lat, lng, active, updated_at FROM launchsites WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to find launch site", e))
    }

    /// Insert or update a launch site keyed by name.
    pub async fn upsert(&self, site: &LaunchSite) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO launchsites (name, lat, lng, active, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (name) DO UPDATE SET \
                lat = EXCLUDED.lat, lng = EXCLUDED.lng, \
                active = EXCLUDED.active, updated_at = EXCLUDED.updated_at",
        )
        .bind(&site.name)
        .bind(site.lat)
        .bind(site.lng)
        .bind(site.active)
        .bind(site.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to save launch site", e))?;
        Ok(())
    }

    /// Count launch sites.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM launchsites")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::database("Failed to count launch sites", e)
            })
    }

    /// Insert sites that do not exist yet, in one transaction.
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_missing(&self, sites: &[LaunchSite]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::database("Failed to begin transaction", e)
        })?;

        let mut inserted = 0;
        for site in sites {
            let result = sqlx::query(
                "INSERT INTO launchsites (name, lat, lng, active, updated_at) \
                 VALUES ($1, $2, $3, $4, $5) ON CONFLICT (name) DO NOTHING",
            )
            .bind(&site.name)
            .bind(site.lat)
            .bind(site.lng)
            .bind(site.active)
            .bind(site.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database("Failed to seed launch site", e)
            })?;
            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            AppError::database("Failed to commit launch site seed", e)
        })?;
        Ok(inserted)
    }
}
