use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, info,
    spotify::{SearchEvent, SearchSession},
    success,
    types::{SpotifyTrack, TrackTableRow},
    warning,
};

/// Runs one debounced search and waits for it to settle, showing a spinner
/// while the demo "fetch" is outstanding.
pub async fn run_search(query: &str) -> Option<SearchEvent> {
    let mut session = SearchSession::new(config::search_debounce());
    if let Some(event) = session.input(query) {
        return Some(event);
    }

    if !session.is_pending() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching Spotify (demo mode)...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let event = session.settle().await;
    pb.finish_and_clear();
    event
}

/// Picks the track a search would hand to the entry form: the resolved link, or
/// the first match.
pub fn first_track(event: Option<SearchEvent>) -> Option<SpotifyTrack> {
    match event? {
        SearchEvent::Resolved(track) => Some(track),
        SearchEvent::Results(tracks) => tracks.into_iter().next(),
        SearchEvent::Cleared => None,
    }
}

pub async fn search(query: String) {
    match run_search(&query).await {
        Some(SearchEvent::Resolved(track)) => {
            success!("Resolved link to {}", track.display_title());
            println!("{}", Table::new(vec![track_row(&track)]));
        }
        Some(SearchEvent::Results(tracks)) if tracks.is_empty() => {
            info!("No tracks match '{}'.", query);
        }
        Some(SearchEvent::Results(tracks)) => {
            let rows: Vec<TrackTableRow> = tracks.iter().map(track_row).collect();
            println!("{}", Table::new(rows));
        }
        Some(SearchEvent::Cleared) => {
            warning!("Type at least two characters or paste a track link.");
        }
        None => warning!("Cannot read a track id from '{}'.", query),
    }
}

fn track_row(track: &SpotifyTrack) -> TrackTableRow {
    let year = track
        .album
        .release_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%Y").to_string())
        .unwrap_or_default();

    TrackTableRow {
        id: track.id.clone(),
        name: track.name.clone(),
        artists: track.artist_names(),
        year,
        popularity: format!("{}/100", track.popularity),
    }
}
