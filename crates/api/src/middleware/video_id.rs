//! Path id extractor for `/videos/{id}` routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use vidshelf_core::error::CoreError;
use vidshelf_core::types::DbId;
use vidshelf_core::validation::id::parse_id;

use crate::error::AppError;

/// A validated video id taken from the `{id}` path segment.
///
/// Extraction fails with a 400 `errorsMessages` envelope before the handler
/// runs, so handlers taking this never see a malformed id and never touch
/// the store for one.
///
/// ```ignore
/// async fn get_video(VideoIdParam(id): VideoIdParam) -> AppResult<Json<Video>> { ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoIdParam(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for VideoIdParam {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        parse_id(Some(&raw))
            .map(VideoIdParam)
            .map_err(|err| AppError::Core(CoreError::Validation(vec![err])))
    }
}
