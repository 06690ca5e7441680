use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use petshop_core::error::CoreError;
use petshop_db::error::RepoError;
use serde_json::json;

/// Generic body message for every validation or integrity failure.
pub const WRONG_DATA_MESSAGE: &str = "Wrong data";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx` errors for unexpected
/// database failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses; details are logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `petshop_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A path segment that cannot name a record, e.g. a non-integer id.
    #[error("Unmatched path: {0}")]
    UnmatchedPath(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a wrong-data failure with a log-only detail.
    pub fn wrong_data(detail: impl Into<String>) -> Self {
        AppError::Core(CoreError::WrongData(detail.into()))
    }

    pub fn not_found(entity: &'static str, id: petshop_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Invalid(core) => AppError::Core(core),
            RepoError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::warn!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::NoneFound { entities } => {
                    tracing::warn!(entities, "Collection is empty");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entities} not found"),
                    )
                }
                CoreError::WrongData(detail) => {
                    tracing::warn!(detail = %detail, "Rejected request: wrong data");
                    (
                        StatusCode::BAD_REQUEST,
                        "WRONG_DATA",
                        WRONG_DATA_MESSAGE.to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::UnmatchedPath(detail) => {
                tracing::warn!(detail = %detail, "Path does not name a record");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Resource not found".to_string(),
                )
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique, check, and foreign key violations map to 400 wrong data. The
///   handlers pre-check all of these, so reaching here means a concurrent
///   writer got in between.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                || db_err.is_check_violation()
                || db_err.is_foreign_key_violation() =>
        {
            tracing::warn!(error = %db_err, "Constraint violation");
            (
                StatusCode::BAD_REQUEST,
                "WRONG_DATA",
                WRONG_DATA_MESSAGE.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
