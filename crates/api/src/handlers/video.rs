//! Handlers for the `/videos` resource.
//!
//! Id-bearing routes validate the path id through [`VideoIdParam`] before
//! anything else happens. Bodies are read as untyped JSON and handed to the
//! core input validators, which are the only thing allowed to turn them
//! into typed input. Nothing is written unless the whole body validates.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use vidshelf_core::error::CoreError;
use vidshelf_core::timestamp;
use vidshelf_core::types::DbId;
use vidshelf_core::validation::input::{
    body_fields, validate_create_video, validate_update_video,
};
use vidshelf_db::models::video::Video;
use vidshelf_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::video_id::VideoIdParam;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Video", id })
}

/// Unwrap a JSON body, reporting malformed JSON as a plain bad request.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /videos
///
/// List every video in insertion order. Never fails.
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<Video>> {
    Json(VideoRepo::list_all(&state.store).await)
}

/// GET /videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    VideoIdParam(id): VideoIdParam,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::find_by_id(&state.store, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(video))
}

/// POST /videos
///
/// Create a video from `{ title, author, availableResolutions }`. New videos
/// are not downloadable, carry no age restriction and are published at
/// creation time. Returns the stored record with HTTP 201.
pub async fn create_video(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Video>)> {
    let body = body_fields(json_body(body)?);
    let input = validate_create_video(&body).map_err(CoreError::Validation)?;

    let video = VideoRepo::create(&state.store, input, timestamp::now()).await;

    tracing::info!(
        video_id = video.id,
        title = %video.title,
        author = %video.author,
        "Video created",
    );

    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /videos/{id}
///
/// Replace every mutable field of a video. A missing video is reported
/// before the body is looked at. Returns 204 with no body.
pub async fn update_video(
    State(state): State<AppState>,
    VideoIdParam(id): VideoIdParam,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<StatusCode> {
    if !VideoRepo::exists(&state.store, id).await {
        return Err(not_found(id));
    }

    let body = body_fields(json_body(body)?);
    let input = validate_update_video(&body).map_err(CoreError::Validation)?;

    // The video may have been deleted since the existence check.
    if !VideoRepo::update(&state.store, id, input).await {
        return Err(not_found(id));
    }

    tracing::info!(video_id = id, "Video updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /videos/{id}
///
/// Returns 204 on success, 404 if not found.
pub async fn delete_video(
    State(state): State<AppState>,
    VideoIdParam(id): VideoIdParam,
) -> AppResult<StatusCode> {
    if VideoRepo::delete(&state.store, id).await {
        tracing::info!(video_id = id, "Video deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
