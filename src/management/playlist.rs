use std::fmt;

use crate::{
    management::{AppStore, StoreError},
    spotify,
    types::Recommendation,
};

pub const PLAYLIST_URL_MARKER: &str = "open.spotify.com/playlist/";

pub const EMAIL_SUBJECT: &str = "🎵 Your Weekly SoundStories Recommendation";

#[derive(Debug)]
pub enum PlaylistError {
    EmptyUrl,
    InvalidUrl(String),
    NoSpotifyTracks,
    MissingEmail,
    NoRecommendations,
    StoreError(StoreError),
}

impl From<StoreError> for PlaylistError {
    fn from(err: StoreError) -> Self {
        PlaylistError::StoreError(err)
    }
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::EmptyUrl => write!(f, "Please enter a Spotify playlist URL"),
            PlaylistError::InvalidUrl(_) => write!(f, "Please enter a valid Spotify playlist URL"),
            PlaylistError::NoSpotifyTracks => {
                write!(f, "No recommendations with Spotify links found.")
            }
            PlaylistError::MissingEmail => write!(f, "Please enter an email address."),
            PlaylistError::NoRecommendations => {
                write!(f, "Please add at least one recommendation first.")
            }
            PlaylistError::StoreError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlaylistError {}

pub fn validate_playlist_url(url: &str) -> Result<String, PlaylistError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(PlaylistError::EmptyUrl);
    }
    if !url.contains(PLAYLIST_URL_MARKER) {
        return Err(PlaylistError::InvalidUrl(url.to_string()));
    }
    Ok(url.to_string())
}

/// Validates `url` and persists it as the curated playlist.
pub async fn save_playlist_url(store: &mut AppStore, url: &str) -> Result<String, PlaylistError> {
    let url = validate_playlist_url(url)?;
    store.set_playlist_url(url.clone()).await?;
    Ok(url)
}

pub fn spotify_track_count(recommendations: &[Recommendation]) -> usize {
    recommendations
        .iter()
        .filter(|r| r.spotify_url().is_some())
        .count()
}

/// Numbered list of every recommendation that has a Spotify link, ready to be
/// pasted into a playlist.
pub fn generate_track_list(recommendations: &[Recommendation]) -> Result<String, PlaylistError> {
    let entries: Vec<String> = recommendations
        .iter()
        .filter_map(|r| r.spotify_url().map(|link| (r, link)))
        .enumerate()
        .map(|(index, (r, link))| {
            let track_id = spotify::extract_track_id(link).unwrap_or_else(|| "N/A".to_string());
            format!(
                "{}. {}\n   {}\n   Track ID: {}",
                index + 1,
                r.title,
                link,
                track_id
            )
        })
        .collect();

    if entries.is_empty() {
        return Err(PlaylistError::NoSpotifyTracks);
    }

    Ok(entries.join("\n\n"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailPreview {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Builds the weekly mail for the most recently added recommendation. Nothing
/// is sent.
pub fn email_preview(
    recommendations: &[Recommendation],
    to: &str,
) -> Result<EmailPreview, PlaylistError> {
    let to = to.trim();
    if to.is_empty() {
        return Err(PlaylistError::MissingEmail);
    }

    let latest = recommendations
        .last()
        .ok_or(PlaylistError::NoRecommendations)?;

    Ok(EmailPreview {
        to: to.to_string(),
        subject: EMAIL_SUBJECT.to_string(),
        body: format!(
            "{}\n\n{}\n\n🎧 Links: {}",
            latest.title,
            latest.story,
            latest.spotify_url().unwrap_or("N/A")
        ),
    })
}
