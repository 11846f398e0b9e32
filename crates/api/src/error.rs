use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use murmur_core::error::CoreError;
use murmur_core::validation::ValidationResult;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for engine-usage faults and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An engine-usage fault from `murmur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that failed rule validation.
    ///
    /// Not an internal fault: the full result is carried so the response
    /// can list every violation.
    #[error("Validation failed")]
    ValidationFailed(ValidationResult),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Rule violations: 400 with one entry per violation, in
            // evaluation order.
            AppError::ValidationFailed(result) => {
                let violations: Vec<_> = result
                    .violations
                    .iter()
                    .map(|v| json!({ "property": v.property, "message": v.message }))
                    .collect();
                let body = json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "violations": violations,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }

            // Engine-usage faults are configuration bugs, not client
            // errors: log the detail, return a sanitized 500.
            AppError::Core(core) => {
                tracing::error!(error = %core, "Validation engine usage fault");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }

            AppError::BadRequest(msg) => {
                let body = json!({ "error": msg, "code": "BAD_REQUEST" });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
