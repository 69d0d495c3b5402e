//! Repository for the `movie` table.
//!
//! Mutations report the affected-row count; callers decide what a zero count
//! means. Reads come back in `movie_id` order, which is insertion order.

use cinedex_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{Movie, MovieInput, MovieName};

/// Column list for full `movie` rows.
const COLUMNS: &str = "movie_id, director_id, movie_name, lead_actor";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Names of every movie.
    pub async fn list_names(pool: &SqlitePool) -> Result<Vec<MovieName>, sqlx::Error> {
        sqlx::query_as::<_, MovieName>("SELECT movie_name FROM movie ORDER BY movie_id")
            .fetch_all(pool)
            .await
    }

    /// Names of the movies by one director. An unknown director yields an
    /// empty list.
    pub async fn list_names_by_director(
        pool: &SqlitePool,
        director_id: DbId,
    ) -> Result<Vec<MovieName>, sqlx::Error> {
        sqlx::query_as::<_, MovieName>(
            "SELECT movie_name FROM movie WHERE director_id = ?1 ORDER BY movie_id",
        )
        .bind(director_id)
        .fetch_all(pool)
        .await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE movie_id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a movie, returning the id the engine assigned.
    pub async fn create(pool: &SqlitePool, input: &MovieInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movie (director_id, movie_name, lead_actor) \
             VALUES (?1, ?2, ?3) \
             RETURNING movie_id",
        )
        .bind(input.director_id)
        .bind(&input.movie_name)
        .bind(&input.lead_actor)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every mutable column of a movie. Returns the number of rows
    /// changed (0 when the id does not exist; no row is created).
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &MovieInput,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movie \
             SET director_id = ?1, movie_name = ?2, lead_actor = ?3 \
             WHERE movie_id = ?4",
        )
        .bind(input.director_id)
        .bind(&input.movie_name)
        .bind(&input.lead_actor)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a movie. Returns the number of rows removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE movie_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
