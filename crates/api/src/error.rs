use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use drivehub_core::enquiry::FieldError;
use drivehub_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the wire shapes the frontend
/// depends on: `{message}` for catalog errors, `{success:false, message,
/// errors?}` for form-intake failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `drivehub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource lookup miss; a normal outcome, never logged as a failure.
    #[error("{0}")]
    NotFound(&'static str),

    /// Form validation failure with field-level detail.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Fixed-window rate limit exceeded.
    #[error("Too many requests")]
    RateLimited,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, axum::Json(json!({ "message": message }))).into_response()
            }

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),

            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                axum::Json(json!({
                    "success": false,
                    "message": "Too many requests. Please try again later.",
                })),
            )
                .into_response(),

            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "lookup miss");
                    (
                        StatusCode::NOT_FOUND,
                        axum::Json(json!({ "message": "Car not found" })),
                    )
                        .into_response()
                }
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    axum::Json(json!({ "success": false, "message": msg })),
                )
                    .into_response(),
                CoreError::RateLimited(_) => AppError::RateLimited.into_response(),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_response()
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_response()
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_response()
            }
        }
    }
}

fn internal_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "message": "An internal error occurred" })),
    )
        .into_response()
}
