use std::{fmt, io::Error, path::PathBuf};

use chrono::Utc;

use crate::{
    config,
    types::{AppState, NewRecommendation, Recommendation, RecommendationUpdate},
    utils, warning,
};

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "cannot write state file: {}", e),
            StoreError::SerdeError(e) => write!(f, "cannot serialize state: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl AppState {
    pub fn with_recommendation(&self, recommendation: Recommendation) -> AppState {
        let mut recommendations = self.recommendations.clone();
        recommendations.push(recommendation);
        AppState {
            recommendations,
            ..self.clone()
        }
    }

    pub fn without_recommendation(&self, id: i64) -> AppState {
        AppState {
            recommendations: self
                .recommendations
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    pub fn with_update(&self, id: i64, update: &RecommendationUpdate) -> AppState {
        AppState {
            recommendations: self
                .recommendations
                .iter()
                .map(|r| if r.id == id { merge(r, update) } else { r.clone() })
                .collect(),
            ..self.clone()
        }
    }

    pub fn with_playlist_url(&self, url: String) -> AppState {
        AppState {
            spotify_playlist_url: Some(url),
            ..self.clone()
        }
    }

    pub fn find(&self, id: i64) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }

    /// Smallest identifier at or after `now_ms` that no stored entry uses yet.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        let highest = self.recommendations.iter().map(|r| r.id).max();
        match highest {
            Some(highest) if highest >= now_ms => match highest.checked_add(1) {
                Some(next) => next,
                None => (now_ms..i64::MAX)
                    .find(|id| self.find(*id).is_none())
                    .unwrap_or(now_ms),
            },
            _ => now_ms,
        }
    }
}

fn merge(current: &Recommendation, update: &RecommendationUpdate) -> Recommendation {
    let mut merged = current.clone();
    if let Some(title) = &update.title {
        merged.title = title.clone();
    }
    if let Some(story) = &update.story {
        merged.story = story.clone();
    }
    // a blank link clears the stored one
    if let Some(link) = &update.spotify_link {
        merged.spotify_link = utils::non_blank(link);
    }
    if let Some(link) = &update.youtube_link {
        merged.youtube_link = utils::non_blank(link);
    }
    if let Some(links) = &update.other_links {
        merged.other_links = links.clone();
    }
    if let Some(image) = &update.image {
        merged.image = image.clone();
    }
    if let Some(date) = update.scheduled_date {
        merged.scheduled_date = date;
    }
    merged
}

/// Owner of the persisted [`AppState`] aggregate.
///
/// Every mutation derives a new snapshot from the current one and hands it to
/// [`AppStore::save`], which writes the whole document before the snapshot
/// becomes current. A failed write therefore leaves the in-memory state at the
/// last value that reached disk.
pub struct AppStore {
    path: PathBuf,
    state: AppState,
}

impl AppStore {
    pub fn new(path: PathBuf, state: Option<AppState>) -> Self {
        Self {
            path,
            state: state.unwrap_or_default(),
        }
    }

    pub async fn load() -> Self {
        Self::load_from(config::state_path()).await
    }

    /// Reads the aggregate at `path`, falling back to an empty one when the file
    /// is missing or unreadable.
    pub async fn load_from(path: PathBuf) -> Self {
        let state = match async_fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<AppState>(&content) {
                Ok(state) => state,
                Err(e) => {
                    warning!("Error loading data: {}", e);
                    AppState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppState::default(),
            Err(e) => {
                warning!("Error loading data: {}", e);
                AppState::default()
            }
        };

        Self { path, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub async fn save(&mut self, new_state: AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&new_state)?;

        // rename over the old file so readers never observe a half-written document
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let written = match async_fs::write(&tmp, json).await {
            Ok(()) => async_fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(StoreError::IoError(e));
        }

        self.state = new_state;
        Ok(())
    }

    pub async fn add_recommendation(
        &mut self,
        fields: NewRecommendation,
    ) -> Result<Recommendation, StoreError> {
        let now = Utc::now();
        let recommendation = Recommendation {
            id: self.state.next_id(now.timestamp_millis()),
            title: fields.title,
            story: fields.story,
            spotify_link: fields.spotify_link,
            youtube_link: fields.youtube_link,
            other_links: fields.other_links,
            image: fields.image,
            scheduled_date: fields.scheduled_date,
            created_at: now,
            spotify_data: fields.spotify_data,
        };

        let new_state = self.state.with_recommendation(recommendation.clone());
        self.save(new_state).await?;
        Ok(recommendation)
    }

    /// Returns `false` without touching storage when `id` is unknown.
    pub async fn delete_recommendation(&mut self, id: i64) -> Result<bool, StoreError> {
        if self.state.find(id).is_none() {
            return Ok(false);
        }

        let new_state = self.state.without_recommendation(id);
        self.save(new_state).await?;
        Ok(true)
    }

    /// Returns `false` without touching storage when `id` is unknown.
    pub async fn update_recommendation(
        &mut self,
        id: i64,
        update: RecommendationUpdate,
    ) -> Result<bool, StoreError> {
        if self.state.find(id).is_none() {
            return Ok(false);
        }

        let new_state = self.state.with_update(id, &update);
        self.save(new_state).await?;
        Ok(true)
    }

    pub async fn set_playlist_url(&mut self, url: String) -> Result<(), StoreError> {
        let new_state = self.state.with_playlist_url(url);
        self.save(new_state).await
    }
}
