//! Liveness and catalog readiness.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::catalog::DirectorCheck;
use cinedex_db::CatalogStats;
use serde::Serialize;

use crate::error::classify_sqlx_error;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    /// `ok` when both catalog tables answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Director check policy the server is running with.
    pub director_check: DirectorCheck,
    /// Table row counts; absent when the catalog could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogStats>,
}

/// GET /health
///
/// `200` with row counts when the `movie` and `director` tables can be
/// queried, `503` with `status: degraded` when they cannot.
pub async fn catalog_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<CatalogHealth>) {
    let director_check = state.config.director_check;

    match cinedex_db::catalog_stats(&state.pool).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(CatalogHealth {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                director_check,
                catalog: Some(stats),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %classify_sqlx_error(&err), "Catalog is not readable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(CatalogHealth {
                    status: "degraded",
                    version: env!("CARGO_PKG_VERSION"),
                    director_check,
                    catalog: None,
                }),
            )
        }
    }
}
