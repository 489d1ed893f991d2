//! Translation of failures into HTTP responses.
//!
//! Handlers return [`AppError`]; every failure renders as a
//! `{ "error": ..., "code": ... }` JSON body. Domain errors carry their own
//! client-facing message; database and internal failures are logged in full
//! and replaced with a generic body so infrastructure detail never reaches
//! a client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use opsboard_core::error::CoreError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain rule violation from `opsboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database failure from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure in the server's own machinery (hashing, token signing).
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// The generic 500 triple used whenever detail must not leak.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl AppError {
    /// Resolve this error to its HTTP status, stable error code, and
    /// client-facing message.
    fn render(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => {
                let status = match core {
                    CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                    CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                    CoreError::Conflict(_) => StatusCode::CONFLICT,
                    CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                    CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
                };
                let code = match core {
                    CoreError::NotFound { .. } => "NOT_FOUND",
                    CoreError::Validation(_) => "VALIDATION_ERROR",
                    CoreError::Conflict(_) => "CONFLICT",
                    CoreError::Unauthorized(_) => "UNAUTHORIZED",
                    CoreError::Forbidden(_) => "FORBIDDEN",
                };
                (status, code, core.to_string())
            }
            AppError::Database(err) => render_sqlx(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.render();
        let body = json!({
            "error": message,
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error to an HTTP triple.
///
/// `RowNotFound` is a 404. A unique violation (Postgres 23505) on one of
/// our `uq_`-named constraints is a 409 -- this backstops races the
/// handlers' own existence checks cannot close, like two registrations of
/// the same phone number landing together. Anything else is a logged 500.
fn render_sqlx(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
