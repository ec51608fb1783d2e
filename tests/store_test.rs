use std::{collections::HashSet, path::PathBuf};

use chrono::{Duration, TimeZone, Utc};
use soundstories::management::AppStore;
use soundstories::types::{AppState, NewRecommendation, Recommendation, RecommendationUpdate};
use tempfile::TempDir;

// Helper function to create recommendation fields scheduled relative to now
fn create_test_fields(title: &str, days_from_now: i64) -> NewRecommendation {
    NewRecommendation {
        title: title.to_string(),
        story: format!("The story of {}", title),
        spotify_link: None,
        youtube_link: None,
        other_links: Vec::new(),
        image: "https://example.com/cover.png".to_string(),
        scheduled_date: Utc::now() + Duration::days(days_from_now),
        spotify_data: None,
    }
}

fn state_path(dir: &TempDir) -> PathBuf {
    dir.path().join("soundstories-data.json")
}

#[tokio::test]
async fn test_load_missing_file_yields_empty_state() {
    let dir = TempDir::new().unwrap();
    let store = AppStore::load_from(state_path(&dir)).await;

    assert_eq!(store.state(), &AppState::default());
    assert!(store.state().spotify_playlist_url.is_none());
}

#[tokio::test]
async fn test_load_malformed_file_yields_empty_state() {
    let dir = TempDir::new().unwrap();
    let path = state_path(&dir);
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = AppStore::load_from(path).await;
    assert_eq!(store.state(), &AppState::default());
}

#[tokio::test]
async fn test_load_document_with_form_dates_and_missing_collections() {
    let dir = TempDir::new().unwrap();
    let path = state_path(&dir);
    std::fs::write(
        &path,
        r#"{
            "recommendations": [{
                "id": 1718000000000,
                "title": "Bohemian Rhapsody - Queen",
                "story": "A story",
                "spotifyLink": "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh",
                "otherLinks": [],
                "image": "data:image/png;base64,AAAA",
                "scheduledDate": "2024-06-14T07:00",
                "createdAt": "2024-06-10T09:30:00.000Z"
            }],
            "spotifyPlaylistUrl": "https://open.spotify.com/playlist/abc"
        }"#,
    )
    .unwrap();

    let store = AppStore::load_from(path).await;
    let state = store.state();

    assert_eq!(state.recommendations.len(), 1);
    assert!(state.subscribers.is_empty());
    assert!(state.calendar_events.is_empty());
    assert_eq!(
        state.spotify_playlist_url.as_deref(),
        Some("https://open.spotify.com/playlist/abc")
    );
    assert_eq!(
        state.recommendations[0].created_at,
        Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap()
    );
}

#[tokio::test]
async fn test_persisted_state_matches_memory_after_mutations() {
    let dir = TempDir::new().unwrap();
    let path = state_path(&dir);
    let mut store = AppStore::load_from(path.clone()).await;

    let first = store
        .add_recommendation(create_test_fields("First - Artist", 3))
        .await
        .unwrap();
    let second = store
        .add_recommendation(create_test_fields("Second - Artist", -3))
        .await
        .unwrap();
    store
        .add_recommendation(create_test_fields("Third - Artist", 10))
        .await
        .unwrap();

    store.delete_recommendation(first.id).await.unwrap();
    store
        .update_recommendation(
            second.id,
            RecommendationUpdate {
                story: Some("Rewritten".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    store
        .set_playlist_url("https://open.spotify.com/playlist/xyz".to_string())
        .await
        .unwrap();

    let reloaded = AppStore::load_from(path).await;
    assert_eq!(reloaded.state(), store.state());
    assert_eq!(store.state().recommendations.len(), 2);
}

#[tokio::test]
async fn test_add_assigns_unique_ids_and_creation_time() {
    let dir = TempDir::new().unwrap();
    let mut store = AppStore::load_from(state_path(&dir)).await;
    let before = Utc::now();

    let mut ids = HashSet::new();
    for i in 0..20 {
        let rec = store
            .add_recommendation(create_test_fields(&format!("Song {}", i), 1))
            .await
            .unwrap();
        assert!(rec.created_at >= before);
        assert!(ids.insert(rec.id), "duplicate id {}", rec.id);
    }

    let stored: Vec<i64> = store.state().recommendations.iter().map(|r| r.id).collect();
    let mut sorted = stored.clone();
    sorted.sort();
    assert_eq!(stored, sorted); // ids grow with creation order
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_collection_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut store = AppStore::load_from(state_path(&dir)).await;
    store
        .add_recommendation(create_test_fields("Keep - Me", 1))
        .await
        .unwrap();
    let before = store.state().clone();

    let removed = store.delete_recommendation(42).await.unwrap();

    assert!(!removed);
    assert_eq!(store.state(), &before);
}

#[tokio::test]
async fn test_update_merges_only_given_fields() {
    let dir = TempDir::new().unwrap();
    let mut store = AppStore::load_from(state_path(&dir)).await;
    let rec = store
        .add_recommendation(create_test_fields("Original - Artist", 1))
        .await
        .unwrap();

    let updated = store
        .update_recommendation(
            rec.id,
            RecommendationUpdate {
                title: Some("Renamed - Artist".to_string()),
                youtube_link: Some("https://youtu.be/abc".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let stored = store.state().find(rec.id).unwrap();
    assert_eq!(stored.title, "Renamed - Artist");
    assert_eq!(stored.youtube_link.as_deref(), Some("https://youtu.be/abc"));
    assert_eq!(stored.story, rec.story);
    assert_eq!(stored.scheduled_date, rec.scheduled_date);
    assert_eq!(stored.created_at, rec.created_at);

    let missing = store
        .update_recommendation(7, RecommendationUpdate::default())
        .await
        .unwrap();
    assert!(!missing);
}

#[tokio::test]
async fn test_failed_save_keeps_last_good_state() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let mut store = AppStore::new(blocker.join("state.json"), None);
    let result = store
        .add_recommendation(create_test_fields("Lost - Artist", 1))
        .await;

    assert!(result.is_err());
    assert!(store.state().recommendations.is_empty());
}

#[tokio::test]
async fn test_failed_rename_removes_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = state_path(&dir);
    // a non-empty directory in place of the document makes the rename fail
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    let mut store = AppStore::new(path.clone(), None);
    let result = store
        .add_recommendation(create_test_fields("Stuck - Artist", 1))
        .await;

    assert!(result.is_err());
    assert!(store.state().recommendations.is_empty());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_saved_document_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let path = state_path(&dir);
    let mut store = AppStore::load_from(path.clone()).await;
    store
        .add_recommendation(create_test_fields("Keys - Artist", 1))
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"scheduledDate\""));
    assert!(content.contains("\"createdAt\""));
    assert!(content.contains("\"calendarEvents\""));
    assert!(!content.contains("spotifyPlaylistUrl"));
}

#[test]
fn test_next_id_skips_past_existing_ids() {
    let empty = AppState::default();
    assert_eq!(empty.next_id(1000), 1000);

    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let state = empty.with_recommendation(Recommendation {
        id: 5000,
        title: "Clock - Skew".to_string(),
        story: "Stored by a clock running ahead".to_string(),
        spotify_link: None,
        youtube_link: None,
        other_links: Vec::new(),
        image: "https://example.com/a.png".to_string(),
        scheduled_date: created_at,
        created_at,
        spotify_data: None,
    });

    assert_eq!(state.next_id(1000), 5001);
    assert_eq!(state.next_id(9000), 9000);
}

#[test]
fn test_next_id_after_maximum_id() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let stored = |id: i64| Recommendation {
        id,
        title: "Edge - Case".to_string(),
        story: "Imported with the largest id".to_string(),
        spotify_link: None,
        youtube_link: None,
        other_links: Vec::new(),
        image: "https://example.com/a.png".to_string(),
        scheduled_date: created_at,
        created_at,
        spotify_data: None,
    };

    let state = AppState::default().with_recommendation(stored(i64::MAX));
    assert_eq!(state.next_id(1000), 1000);

    let state = state.with_recommendation(stored(1000));
    assert_eq!(state.next_id(1000), 1001);
}
