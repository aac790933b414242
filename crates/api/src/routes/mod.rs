pub mod health;
pub mod root;
pub mod testing;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                 list, create (GET, POST)
/// /videos/{id}            get, update, delete (GET, PUT, DELETE)
///
/// /testing/all-data       wipe all records (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Video records CRUD.
        .nest("/videos", video::router())
        // Test-suite maintenance.
        .nest("/testing", testing::router())
}
