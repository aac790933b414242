use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vidshelf_db::repositories::VideoRepo;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of videos currently stored.
    pub videos: usize,
}

/// GET /health -- returns service health and store size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        videos: VideoRepo::count(&state.store).await,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
