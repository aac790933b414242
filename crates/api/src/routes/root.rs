use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- plain-text greeting.
async fn greeting() -> &'static str {
    "Hello world!"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}
