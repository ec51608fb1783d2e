//! Configuration management for SoundStories.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Unlike credentials-driven tools, every setting here
//! has a usable default, so a missing `.env` is never an error.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

/// Subscription feed shown to subscribers when nothing else is configured.
pub const DEFAULT_CALENDAR_URL: &str = "webcal://soundstories.app/calendar/feed.ics";

/// Delay between the last keystroke and the search it triggers.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

const STATE_FILE_NAME: &str = "soundstories-data.json";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `soundstories` data directory if it doesn't exist and loads
/// variables from `soundstories/.env` when that file is present:
/// - Linux: `~/.local/share/soundstories/.env`
/// - macOS: `~/Library/Application Support/soundstories/.env`
/// - Windows: `%LOCALAPPDATA%/soundstories/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the application's directory below the platform data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("soundstories");
    path
}

/// Returns the location of the persisted application state.
///
/// `SOUNDSTORIES_STATE_PATH` overrides the default of
/// `<data dir>/soundstories/soundstories-data.json`.
pub fn state_path() -> PathBuf {
    match env::var("SOUNDSTORIES_STATE_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => data_dir().join(STATE_FILE_NAME),
    }
}

/// Returns the calendar subscription link handed out to subscribers.
pub fn calendar_url() -> String {
    env::var("SOUNDSTORIES_CALENDAR_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CALENDAR_URL.to_string())
}

/// Returns the search debounce interval.
///
/// Reads `SOUNDSTORIES_SEARCH_DEBOUNCE_MS`; unparsable values fall back to
/// [`DEFAULT_SEARCH_DEBOUNCE_MS`].
pub fn search_debounce() -> Duration {
    let millis = env::var("SOUNDSTORIES_SEARCH_DEBOUNCE_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);
    Duration::from_millis(millis)
}
