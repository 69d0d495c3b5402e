use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinedex_core::error::CoreError;
use serde_json::json;

/// Message sent for every 500; internal details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (body or path) with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_core_error(&classify_sqlx_error(err)),
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, error code and client-facing message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => {
            tracing::debug!(entity, id, "Requested record not found");
            (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            )
        }
        CoreError::Validation(msg) => {
            tracing::warn!(error = %msg, "Rejected invalid input");
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        CoreError::ConstraintViolation(msg) => {
            tracing::warn!(error = %msg, "Constraint violation");
            (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION", msg.clone())
        }
        CoreError::StorageUnavailable(msg) => {
            tracing::error!(error = %msg, "Storage unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_UNAVAILABLE",
                "Storage is temporarily unavailable".to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        }
    }
}

/// Fold a sqlx error into one of the domain error kinds.
///
/// - Foreign key, unique, not-null and check violations become
///   [`CoreError::ConstraintViolation`].
/// - Pool exhaustion, a closed pool, I/O failures and `SQLITE_BUSY` /
///   `SQLITE_LOCKED` become [`CoreError::StorageUnavailable`].
/// - Everything else is [`CoreError::Internal`].
pub fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_foreign_key_violation() {
                return CoreError::ConstraintViolation(
                    "Referenced record does not exist".to_string(),
                );
            }
            if db_err.is_unique_violation() {
                return CoreError::ConstraintViolation("Duplicate value".to_string());
            }
            if db_err.is_check_violation() {
                return CoreError::ConstraintViolation("Check constraint failed".to_string());
            }
            if matches!(db_err.kind(), sqlx::error::ErrorKind::NotNullViolation) {
                return CoreError::ConstraintViolation("Required value missing".to_string());
            }
            // Primary result codes 5 (SQLITE_BUSY) and 6 (SQLITE_LOCKED); the
            // low byte of an extended code is its primary code.
            let busy = db_err
                .code()
                .and_then(|c| c.parse::<i32>().ok())
                .is_some_and(|c| matches!(c & 0xff, 5 | 6));
            if busy {
                return CoreError::StorageUnavailable(db_err.to_string());
            }
            CoreError::Internal(db_err.to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            CoreError::StorageUnavailable(err.to_string())
        }
        other => CoreError::Internal(other.to_string()),
    }
}
