//! Handlers for the `/movies` resource.
//!
//! Reads return JSON; writes return a fixed plain-text confirmation. Update
//! and delete report success even when no row matched the id.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::catalog::{MOVIE_ADDED, MOVIE_REMOVED, MOVIE_UPDATED};
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_core::validation::validate_input;
use cinedex_db::models::movie::{Movie, MovieInput, MovieName};
use cinedex_db::repositories::{DirectorRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// GET /movies
///
/// Names of every movie, in insertion order.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<MovieName>>> {
    let movies = MovieRepo::list_names(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /movies
///
/// Add a movie. Responds `201` with the confirmation text and a `Location`
/// header pointing at the new movie.
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(input): AppJson<MovieInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    ensure_director(&state, input.director_id).await?;

    let movie_id = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(
        movie_id,
        director_id = input.director_id,
        movie_name = %input.movie_name,
        "Movie added",
    );

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/movies/{movie_id}"))],
        MOVIE_ADDED,
    ))
}

/// GET /movies/{movie_id}
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    Ok(Json(movie))
}

/// PUT /movies/{movie_id}
///
/// Overwrite a movie's director, name and lead actor. An unknown id is not
/// an error and creates nothing.
pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
    AppJson(input): AppJson<MovieInput>,
) -> AppResult<&'static str> {
    validate_input(&input)?;
    ensure_director(&state, input.director_id).await?;

    let rows = MovieRepo::update(&state.pool, movie_id, &input).await?;
    tracing::info!(movie_id, rows, "Movie updated");

    Ok(MOVIE_UPDATED)
}

/// DELETE /movies/{movie_id}
pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<&'static str> {
    let rows = MovieRepo::delete(&state.pool, movie_id).await?;
    tracing::info!(movie_id, rows, "Movie removed");

    Ok(MOVIE_REMOVED)
}

/// In strict mode, refuse to write a movie whose director does not exist.
/// Otherwise the database's own constraints decide.
async fn ensure_director(state: &AppState, director_id: DbId) -> AppResult<()> {
    if !state.config.director_check.is_strict() {
        return Ok(());
    }
    if DirectorRepo::exists(&state.pool, director_id).await? {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Validation(format!(
        "Director with id {director_id} does not exist"
    ))))
}
