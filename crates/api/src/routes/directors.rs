use axum::routing::get;
use axum::Router;

use crate::handlers::directors;
use crate::state::AppState;

/// Director routes mounted at `/directors`.
///
/// ```text
/// GET /                        -> list_directors
/// GET /{director_id}/movies    -> list_director_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(directors::list_directors))
        .route("/{director_id}/movies", get(directors::list_director_movies))
}
