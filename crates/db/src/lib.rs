//! Data access layer: SQLite pool bootstrap, row models and repositories.
//!
//! Every repository method runs exactly one parameterized statement. User
//! input is always bound, never formatted into SQL text.

use std::str::FromStr;

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a SQLite URL such as `sqlite://moviesData.db`.
///
/// The database file must already exist. Foreign key enforcement is switched
/// on for every connection, so a schema that declares `REFERENCES` is
/// enforced by the engine.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
    tracing::debug!(max_connections, "Opening SQLite pool");

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the pool can serve a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Row counts of the two catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub movies: i64,
    pub directors: i64,
}

/// Count movies and directors in one statement. Succeeds only when both
/// tables exist and are readable, so it doubles as a schema probe.
pub async fn catalog_stats(pool: &DbPool) -> Result<CatalogStats, sqlx::Error> {
    let (movies, directors) = sqlx::query_as::<_, (i64, i64)>(
        "SELECT (SELECT COUNT(*) FROM movie), (SELECT COUNT(*) FROM director)",
    )
    .fetch_one(pool)
    .await?;

    Ok(CatalogStats { movies, directors })
}
