//! In-memory storage for video records.
//!
//! [`Store`] plays the role a connection pool would for a real database: a
//! cheaply cloneable handle that every repository call takes as its first
//! argument. All tables sit behind one mutex, so each repository call is a
//! single critical section.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::video::Video;

pub mod models;
pub mod repositories;

/// The backing collections. Only reachable through a locked [`Store`].
#[derive(Debug, Default)]
pub struct Tables {
    pub(crate) videos: Vec<Video>,
}

pub type Store = Arc<Mutex<Tables>>;

/// Create an empty store.
pub fn create_store() -> Store {
    Arc::new(Mutex::new(Tables::default()))
}

/// Drop every record in every table.
pub async fn reset(store: &Store) {
    let mut tables = store.lock().await;
    let removed = tables.videos.len();
    tables.videos.clear();
    tracing::debug!(removed, "Store reset");
}
