use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use warren_core::error::CoreError;

use crate::middleware::ErrorMessage;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// `IntoResponse` picks the status code and records the message; the
/// response-shaping middleware turns it into the structured error body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `warren_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::DeleteFailed { entity, id } => {
                    tracing::error!(entity, id, "Delete affected no rows after existence check");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unable to delete {entity} with id {id}"),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("An internal error occurred: {msg}"),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Extension(ErrorMessage(message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409 with a generic duplicate-key message; the constraint name and
///   driver detail stay server-side.
/// - Everything else maps to 500 with the error description appended to a
///   generic prefix; the full diagnostic also goes to the log.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
            {
                tracing::warn!(constraint = db_err.constraint(), "Unique constraint violation");
                return (StatusCode::CONFLICT, "Duplicate key".to_string());
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An internal error occurred: {db_err}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An internal error occurred: {other}"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_and_message(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let message = response
            .extensions()
            .get::<ErrorMessage>()
            .expect("error responses record a message")
            .0
            .clone();
        (status, message)
    }

    #[test]
    fn internal_core_error_message_carries_the_description() {
        let err = AppError::Core(CoreError::Internal("connection pool exhausted".into()));
        let (status, message) = status_and_message(err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            message,
            "An internal error occurred: connection pool exhausted"
        );
    }

    #[test]
    fn unclassified_database_error_message_carries_the_description() {
        let (status, message) = status_and_message(AppError::Database(sqlx::Error::PoolClosed));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.starts_with("An internal error occurred: "));
        assert!(message.len() > "An internal error occurred: ".len());
    }
}
