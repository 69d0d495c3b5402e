pub mod directors;
pub mod movies;

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          catalog readiness
///
/// /movies                          list, create
/// /movies/{movie_id}               get, update, delete
///
/// /directors                       list
/// /directors/{director_id}/movies  movie names by director
/// ```
///
/// Matching is strict: `/movies/` and `/directors/` are not aliases.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::catalog_health))
        .nest("/movies", movies::router())
        .nest("/directors", directors::router())
}
