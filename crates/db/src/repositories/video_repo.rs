//! Repository for the in-memory `videos` collection.
//!
//! Records keep insertion order. New ids are the tail record's id plus one,
//! so deleting the most recent record makes its id available again.

use vidshelf_core::types::{DbId, Timestamp};
use vidshelf_core::validation::input::{CreateVideoInput, UpdateVideoInput};

use crate::models::video::Video;
use crate::Store;

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Snapshot of every video in insertion order.
    pub async fn list_all(store: &Store) -> Vec<Video> {
        store.lock().await.videos.clone()
    }

    /// Find a video by its ID.
    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Video> {
        store
            .lock()
            .await
            .videos
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    /// Whether a video with this ID exists.
    pub async fn exists(store: &Store, id: DbId) -> bool {
        store.lock().await.videos.iter().any(|v| v.id == id)
    }

    /// Append a new video, returning the stored record.
    ///
    /// Id allocation and the append happen under the same lock.
    pub async fn create(store: &Store, input: CreateVideoInput, now: Timestamp) -> Video {
        let mut tables = store.lock().await;
        let id = tables.videos.last().map_or(0, |v| v.id) + 1;

        let video = Video {
            id,
            title: input.title,
            author: input.author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: now,
            publication_date: now,
            available_resolutions: input.available_resolutions,
        };
        tables.videos.push(video.clone());
        tracing::debug!(video_id = id, total = tables.videos.len(), "Video appended");
        video
    }

    /// Replace every mutable field of a video. `id` and `created_at` are kept.
    ///
    /// Returns `false` if no video has this ID.
    pub async fn update(store: &Store, id: DbId, input: UpdateVideoInput) -> bool {
        let mut tables = store.lock().await;
        let Some(video) = tables.videos.iter_mut().find(|v| v.id == id) else {
            return false;
        };

        video.title = input.title;
        video.author = input.author;
        video.available_resolutions = input.available_resolutions;
        video.can_be_downloaded = input.can_be_downloaded;
        video.min_age_restriction = input.min_age_restriction;
        video.publication_date = input.publication_date;
        true
    }

    /// Remove a video. Returns `false` if no video has this ID.
    pub async fn delete(store: &Store, id: DbId) -> bool {
        let mut tables = store.lock().await;
        match tables.videos.iter().position(|v| v.id == id) {
            Some(index) => {
                tables.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stored videos.
    pub async fn count(store: &Store) -> usize {
        store.lock().await.videos.len()
    }
}
