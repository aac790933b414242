//! Integration tests for the in-memory video repository.
//!
//! Exercises the repository layer against a fresh store per test:
//! - Id allocation from the tail record, including reuse after deleting it
//! - Insertion order and snapshot semantics
//! - Full replacement on update
//! - Removal and reset

use vidshelf_core::resolution::Resolution;
use vidshelf_core::timestamp;
use vidshelf_core::validation::input::{CreateVideoInput, UpdateVideoInput};
use vidshelf_db::repositories::VideoRepo;
use vidshelf_db::{create_store, reset};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_video(title: &str) -> CreateVideoInput {
    CreateVideoInput {
        title: title.to_string(),
        author: "author".to_string(),
        available_resolutions: vec![Resolution::P720, Resolution::P144],
    }
}

fn full_update(title: &str) -> UpdateVideoInput {
    UpdateVideoInput {
        title: title.to_string(),
        author: "someone else".to_string(),
        available_resolutions: vec![Resolution::P2160],
        can_be_downloaded: true,
        min_age_restriction: Some(12),
        publication_date: timestamp::parse_canonical("2030-06-01T12:00:00.000Z").unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Create / id allocation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_applies_defaults() {
    let store = create_store();
    let now = timestamp::now();

    let video = VideoRepo::create(&store, new_video("first"), now).await;

    assert_eq!(video.id, 1);
    assert!(!video.can_be_downloaded);
    assert_eq!(video.min_age_restriction, None);
    assert_eq!(video.created_at, now);
    assert_eq!(video.publication_date, now);
    assert_eq!(
        video.available_resolutions,
        vec![Resolution::P720, Resolution::P144]
    );
}

#[tokio::test]
async fn ids_follow_tail_record() {
    let store = create_store();
    let now = timestamp::now();

    let a = VideoRepo::create(&store, new_video("a"), now).await;
    let b = VideoRepo::create(&store, new_video("b"), now).await;
    let c = VideoRepo::create(&store, new_video("c"), now).await;
    assert_eq!((a.id, b.id, c.id), (1, 2, 3));

    // Removing from the middle leaves the tail alone.
    assert!(VideoRepo::delete(&store, b.id).await);
    let d = VideoRepo::create(&store, new_video("d"), now).await;
    assert_eq!(d.id, 4);
}

#[tokio::test]
async fn deleting_tail_record_reuses_its_id() {
    let store = create_store();
    let now = timestamp::now();

    VideoRepo::create(&store, new_video("a"), now).await;
    let b = VideoRepo::create(&store, new_video("b"), now).await;
    assert!(VideoRepo::delete(&store, b.id).await);

    let again = VideoRepo::create(&store, new_video("again"), now).await;
    assert_eq!(again.id, b.id);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let store = create_store();
    let now = timestamp::now();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                VideoRepo::create(&store, new_video(&format!("v{i}")), now)
                    .await
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=50).collect::<Vec<_>>());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = create_store();
    let now = timestamp::now();
    for title in ["x", "y", "z"] {
        VideoRepo::create(&store, new_video(title), now).await;
    }

    let titles: Vec<String> = VideoRepo::list_all(&store)
        .await
        .into_iter()
        .map(|v| v.title)
        .collect();
    assert_eq!(titles, ["x", "y", "z"]);
    assert_eq!(VideoRepo::count(&store).await, 3);
}

#[tokio::test]
async fn find_by_id_and_exists() {
    let store = create_store();
    let created = VideoRepo::create(&store, new_video("find me"), timestamp::now()).await;

    assert_eq!(VideoRepo::find_by_id(&store, created.id).await, Some(created.clone()));
    assert!(VideoRepo::exists(&store, created.id).await);
    assert_eq!(VideoRepo::find_by_id(&store, 999).await, None);
    assert!(!VideoRepo::exists(&store, 999).await);
}

#[tokio::test]
async fn snapshots_are_detached_from_store() {
    let store = create_store();
    let created = VideoRepo::create(&store, new_video("original"), timestamp::now()).await;

    let mut snapshot = VideoRepo::list_all(&store).await;
    snapshot[0].title = "tampered".to_string();

    let stored = VideoRepo::find_by_id(&store, created.id).await.unwrap();
    assert_eq!(stored.title, "original");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_mutable_fields_only() {
    let store = create_store();
    let created = VideoRepo::create(&store, new_video("before"), timestamp::now()).await;
    let input = full_update("after");

    assert!(VideoRepo::update(&store, created.id, input.clone()).await);

    let stored = VideoRepo::find_by_id(&store, created.id).await.unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.created_at, created.created_at);
    assert_eq!(stored.title, input.title);
    assert_eq!(stored.author, input.author);
    assert_eq!(stored.available_resolutions, input.available_resolutions);
    assert!(stored.can_be_downloaded);
    assert_eq!(stored.min_age_restriction, Some(12));
    assert_eq!(stored.publication_date, input.publication_date);
}

#[tokio::test]
async fn update_missing_returns_false() {
    let store = create_store();
    assert!(!VideoRepo::update(&store, 1, full_update("nobody")).await);
    assert_eq!(VideoRepo::count(&store).await, 0);
}

// ---------------------------------------------------------------------------
// Delete / reset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_twice() {
    let store = create_store();
    let created = VideoRepo::create(&store, new_video("gone"), timestamp::now()).await;

    assert!(VideoRepo::delete(&store, created.id).await);
    assert!(!VideoRepo::delete(&store, created.id).await);
    assert_eq!(VideoRepo::find_by_id(&store, created.id).await, None);
}

#[tokio::test]
async fn reset_empties_store_and_restarts_ids() {
    let store = create_store();
    let now = timestamp::now();
    VideoRepo::create(&store, new_video("a"), now).await;
    VideoRepo::create(&store, new_video("b"), now).await;

    reset(&store).await;

    assert!(VideoRepo::list_all(&store).await.is_empty());
    let fresh = VideoRepo::create(&store, new_video("fresh"), now).await;
    assert_eq!(fresh.id, 1);
}
