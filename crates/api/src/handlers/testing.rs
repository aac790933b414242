//! Maintenance handlers used by end-to-end test suites.

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// DELETE /testing/all-data
///
/// Wipe every record. Always returns 204.
pub async fn delete_all_data(State(state): State<AppState>) -> StatusCode {
    vidshelf_db::reset(&state.store).await;
    tracing::warn!("All data deleted");
    StatusCode::NO_CONTENT
}
