//! Repository for the `director` table.

use cinedex_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::Director;

/// Provides read access to directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// List every director, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            "SELECT director_id, director_name FROM director ORDER BY director_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether a director with the given id exists.
    pub async fn exists(pool: &SqlitePool, director_id: DbId) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM director WHERE director_id = ?1)",
        )
        .bind(director_id)
        .fetch_one(pool)
        .await?;
        Ok(found != 0)
    }
}
