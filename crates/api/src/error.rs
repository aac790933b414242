use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vidshelf_core::error::CoreError;
use vidshelf_core::validation::ErrorEnvelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]: validation failures produce the
/// `{ "errorsMessages": [...] }` envelope, everything else the generic
/// `{ "error", "code" }` shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vidshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::debug!(count = errors.len(), "Request failed validation");
                return (
                    StatusCode::BAD_REQUEST,
                    axum::Json(ErrorEnvelope::from(errors)),
                )
                    .into_response();
            }
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
