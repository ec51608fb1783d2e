use std::time::Duration;

use soundstories::spotify::*;

#[test]
fn test_extract_track_id() {
    assert_eq!(
        extract_track_id("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh"),
        Some("4iV5W9uYEdYUVa79Axb7Rh".to_string())
    );

    // query strings and locale prefixes are ignored
    assert_eq!(
        extract_track_id("https://open.spotify.com/intl-de/track/5CQ30WqJwcep0pYcV4AMNc?si=abc"),
        Some("5CQ30WqJwcep0pYcV4AMNc".to_string())
    );

    assert_eq!(extract_track_id("https://open.spotify.com/playlist/xyz"), None);
    assert_eq!(extract_track_id("https://open.spotify.com/track/"), None);
}

#[tokio::test]
async fn test_lookup_known_track() {
    let track = lookup_track("4iV5W9uYEdYUVa79Axb7Rh").await;

    assert_eq!(track.name, "Bohemian Rhapsody");
    assert_eq!(track.primary_artist(), Some("Queen"));
    assert_eq!(track.album.name, "A Night at the Opera");
    assert_eq!(track.popularity, 87);
    assert_eq!(track.duration_ms, 355000);
    assert_eq!(
        track.external_urls.spotify,
        "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh"
    );
}

#[tokio::test]
async fn test_lookup_unknown_track_yields_placeholder() {
    let track = lookup_track("0000000000abc").await;

    assert_eq!(track.id, "0000000000abc");
    assert_eq!(track.name, "Unknown Track");
    assert_eq!(track.primary_artist(), Some("Unknown Artist"));
    assert_eq!(track.popularity, 50);
    assert_eq!(track.duration_ms, 180000);
    assert_eq!(
        track.external_urls.spotify,
        "https://open.spotify.com/track/0000000000abc"
    );
}

#[tokio::test]
async fn test_search_matches_name_or_primary_artist() {
    let by_artist = search_tracks("QUEEN").await;
    assert_eq!(by_artist.len(), 1);
    assert_eq!(by_artist[0].name, "Bohemian Rhapsody");

    let by_name = search_tracks("stairway").await;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].primary_artist(), Some("Led Zeppelin"));

    let both = search_tracks("e").await;
    assert_eq!(both.len(), catalog().len());

    assert!(search_tracks("no such song").await.is_empty());
}

#[tokio::test]
async fn test_session_resolves_pasted_link() {
    let mut session = SearchSession::new(Duration::from_millis(10));

    let immediate = session.input("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh");
    assert!(immediate.is_none());

    match session.settle().await {
        Some(SearchEvent::Resolved(track)) => assert_eq!(track.name, "Bohemian Rhapsody"),
        other => panic!("expected resolved track, got {:?}", other),
    }
}

#[tokio::test]
async fn test_session_last_input_wins() {
    let mut session = SearchSession::new(Duration::from_millis(50));

    assert!(session.input("Qu").is_none());
    assert!(session.input("Que").is_none());
    assert!(session.input("Led").is_none());

    match session.settle().await {
        Some(SearchEvent::Results(tracks)) => {
            assert_eq!(tracks.len(), 1);
            assert_eq!(tracks[0].name, "Stairway to Heaven");
        }
        other => panic!("expected results, got {:?}", other),
    }

    // nothing left pending once settled
    assert!(!session.is_pending());
    assert!(session.settle().await.is_none());
}

#[tokio::test]
async fn test_session_short_input_clears() {
    let mut session = SearchSession::new(Duration::from_millis(50));

    assert!(session.input("Queen").is_none());
    assert_eq!(session.input("Q"), Some(SearchEvent::Cleared));
    assert!(!session.is_pending());
    assert!(session.settle().await.is_none());
}

#[tokio::test]
async fn test_session_blank_query_and_bad_link() {
    let mut session = SearchSession::new(Duration::from_millis(5));

    assert_eq!(session.input("   "), Some(SearchEvent::Cleared));
    assert!(!session.is_pending());
    assert!(session.settle().await.is_none());

    assert_eq!(session.input(" a  "), Some(SearchEvent::Cleared));
    assert!(!session.is_pending());

    assert!(session.input("https://open.spotify.com/track/").is_none());
    assert!(!session.is_pending());
}
