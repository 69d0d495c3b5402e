//! Handlers for the read-only `/directors` resource.

use axum::extract::State;
use axum::Json;
use cinedex_core::types::DbId;
use cinedex_db::models::director::Director;
use cinedex_db::models::movie::MovieName;
use cinedex_db::repositories::{DirectorRepo, MovieRepo};

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /directors
pub async fn list_directors(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{director_id}/movies
///
/// Names of the director's movies in insertion order. A director with no
/// movies, or no such director, yields `[]`.
pub async fn list_director_movies(
    State(state): State<AppState>,
    AppPath(director_id): AppPath<DbId>,
) -> AppResult<Json<Vec<MovieName>>> {
    let movies = MovieRepo::list_names_by_director(&state.pool, director_id).await?;
    Ok(Json(movies))
}
