use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gearlog_core::error::CoreError;
use serde::Serialize;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gearlog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A submitted form failed validation. The submitted fields are echoed
    /// back so the client can redisplay the form.
    #[error("Invalid form: {message}")]
    InvalidForm {
        message: String,
        form: serde_json::Value,
    },

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A schema migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    /// Build an [`AppError::InvalidForm`] preserving the submitted form.
    pub fn invalid_form<F: Serialize>(message: impl Into<String>, form: &F) -> Self {
        AppError::InvalidForm {
            message: message.into(),
            form: serde_json::to_value(form).unwrap_or(serde_json::Value::Null),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(core) => {
                let (status, code, message) = match core {
                    CoreError::NotFound { entity, id } => (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} with id {id} not found"),
                    ),
                    CoreError::Validation(msg) => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
                    }
                    err @ CoreError::AlreadyAttached { .. } => {
                        (StatusCode::CONFLICT, "ALREADY_ATTACHED", err.to_string())
                    }
                };
                (status, json!({ "error": message, "code": code }))
            }

            AppError::InvalidForm { message, form } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "code": "VALIDATION_ERROR", "form": form }),
            ),

            // Not retried. The database error text is returned as `detail`.
            AppError::Database(err) => storage_error(&err),
            AppError::Migration(err) => storage_error(&err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn storage_error(err: &dyn std::error::Error) -> (StatusCode, serde_json::Value) {
    tracing::error!(error = %err, "Storage error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "A storage error occurred",
            "code": "STORAGE_ERROR",
            "detail": err.to_string(),
        }),
    )
}
