//! Route definitions for video records.
//!
//! Mounted at `/videos`.
//!
//! ```text
//! GET    /         list_videos
//! POST   /         create_video
//! GET    /{id}     get_video
//! PUT    /{id}     update_video
//! DELETE /{id}     delete_video
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list_videos).post(video::create_video))
        .route(
            "/{id}",
            get(video::get_video)
                .put(video::update_video)
                .delete(video::delete_video),
        )
}
