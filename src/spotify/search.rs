use std::time::Duration;

use tokio::{task::JoinHandle, time::sleep};

use crate::types::SpotifyTrack;

use super::{extract_track_id, is_track_link, lookup_track, search_tracks};

pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A pasted track link resolved to a single track.
    Resolved(SpotifyTrack),
    /// Matches for a free text query, possibly empty.
    Results(Vec<SpotifyTrack>),
    /// The query became blank or too short to search.
    Cleared,
}

/// Debounced search with last-writer-wins semantics.
///
/// Must be used from within a tokio runtime since inputs spawn tasks.
pub struct SearchSession {
    debounce: Duration,
    pending: Option<JoinHandle<SearchEvent>>,
}

impl SearchSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: None,
        }
    }

    /// Feeds the current content of the search field.
    ///
    /// Returns an event right away only when the input clears the results;
    /// everything else is delivered through [`SearchSession::settle`].
    pub fn input(&mut self, text: &str) -> Option<SearchEvent> {
        self.cancel();

        if is_track_link(text) {
            if let Some(track_id) = extract_track_id(text) {
                self.pending = Some(tokio::spawn(async move {
                    SearchEvent::Resolved(lookup_track(&track_id).await)
                }));
            }
            return None;
        }

        if text.trim().chars().count() < MIN_QUERY_CHARS {
            return Some(SearchEvent::Cleared);
        }

        let query = text.to_string();
        let debounce = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            sleep(debounce).await;
            SearchEvent::Results(search_tracks(&query).await)
        }));
        None
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Waits for the outcome of the latest input, if any is outstanding.
    pub async fn settle(&mut self) -> Option<SearchEvent> {
        let handle = self.pending.take()?;
        handle.await.ok()
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
