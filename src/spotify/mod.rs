//! # Spotify Demo Module
//!
//! Track lookup and search for the admin form. There is no network access here:
//! both operations answer from a small built-in catalog so the curation flow
//! works offline. The API shape mirrors what a real Web API client would offer,
//! with async functions returning typed [`SpotifyTrack`](crate::types::SpotifyTrack)
//! records.
//!
//! ## Input handling
//!
//! - Pasted track links (`open.spotify.com/track/<id>`) resolve immediately
//!   through [`lookup_track`].
//! - Free text of two or more characters runs [`search_tracks`] after a debounce.
//! - Shorter input clears the result list.
//!
//! [`SearchSession`] drives that flow: every new input aborts the search still
//! waiting from the previous one, so only the latest input produces results.

use std::sync::LazyLock;

use regex::Regex;

mod demo;
mod search;

pub use demo::catalog;
pub use demo::lookup_track;
pub use demo::search_tracks;
pub use search::MIN_QUERY_CHARS;
pub use search::SearchEvent;
pub use search::SearchSession;

pub const TRACK_URL_MARKER: &str = "open.spotify.com/track/";

static TRACK_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"track/([a-zA-Z0-9]+)").expect("track id pattern is valid"));

pub fn extract_track_id(url: &str) -> Option<String> {
    TRACK_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn is_track_link(input: &str) -> bool {
    input.contains(TRACK_URL_MARKER)
}

pub fn track_url(track_id: &str) -> String {
    format!("https://{}{}", TRACK_URL_MARKER, track_id)
}
