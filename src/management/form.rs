use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    management::{AppStore, StoreError},
    types::{ExternalLink, NewRecommendation, Recommendation, SpotifyTrack},
    utils,
};

pub const STORY_WORD_TARGET: usize = 1000;

#[derive(Debug)]
pub enum FormError {
    MissingFields(Vec<&'static str>),
    InvalidDate(String),
    StoreError(StoreError),
}

impl From<StoreError> for FormError {
    fn from(err: StoreError) -> Self {
        FormError::StoreError(err)
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields(fields) => write!(
                f,
                "Please fill in all required fields (missing: {})",
                fields.join(", ")
            ),
            FormError::InvalidDate(input) => write!(
                f,
                "Cannot read scheduled date '{}', use YYYY-MM-DD HH:MM",
                input
            ),
            FormError::StoreError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormError {}

/// Admin entry form for a new recommendation.
///
/// Holds raw input until [`RecommendationForm::submit`] validates it and hands
/// the result to the store. A successful submit resets every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationForm {
    pub title: String,
    pub story: String,
    pub spotify_link: String,
    pub youtube_link: String,
    pub other_links: Vec<ExternalLink>,
    pub scheduled_date: String,
    pub image: String,
    pub selected_track: Option<SpotifyTrack>,
}

impl RecommendationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills title and Spotify link from a picked track, and the image from its
    /// album cover unless one was already chosen.
    pub fn select_track(&mut self, track: SpotifyTrack) -> &mut Self {
        self.title = track.display_title();
        self.spotify_link = track.external_urls.spotify.clone();
        if self.image.is_empty() {
            if let Some(cover) = track.cover_url() {
                self.image = cover.to_string();
            }
        }
        self.selected_track = Some(track);
        self
    }

    pub fn word_count(&self) -> usize {
        utils::word_count(&self.story)
    }

    pub fn exceeds_word_target(&self) -> bool {
        self.word_count() > STORY_WORD_TARGET
    }

    pub fn resolve_scheduled_date(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, FormError> {
        if self.scheduled_date.trim().is_empty() {
            return Ok(utils::default_scheduled_date(now));
        }

        utils::parse_scheduled_date(&self.scheduled_date)
            .ok_or_else(|| FormError::InvalidDate(self.scheduled_date.clone()))
    }

    /// Checks required fields and produces the record the store will persist.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewRecommendation, FormError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.story.trim().is_empty() {
            missing.push("story");
        }
        if self.image.trim().is_empty() {
            missing.push("image");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let scheduled_date = self.resolve_scheduled_date(now)?;

        Ok(NewRecommendation {
            title: self.title.clone(),
            story: self.story.clone(),
            spotify_link: utils::non_blank(&self.spotify_link),
            youtube_link: utils::non_blank(&self.youtube_link),
            other_links: self.other_links.clone(),
            image: self.image.clone(),
            scheduled_date,
            spotify_data: self.selected_track.clone(),
        })
    }

    pub async fn submit(
        &mut self,
        store: &mut AppStore,
        now: DateTime<Utc>,
    ) -> Result<Recommendation, FormError> {
        let fields = self.validate(now)?;
        let recommendation = store.add_recommendation(fields).await?;
        self.reset();
        Ok(recommendation)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses `platform=url` pairs given on the command line.
pub fn parse_external_link(input: &str) -> Result<ExternalLink, String> {
    let (platform, url) = input
        .split_once('=')
        .ok_or_else(|| format!("invalid link '{}', expected platform=url", input))?;

    let platform = platform.trim();
    let url = url.trim();
    if platform.is_empty() || url.is_empty() {
        return Err(format!("invalid link '{}', expected platform=url", input));
    }

    Ok(ExternalLink {
        platform: platform.to_string(),
        url: url.to_string(),
    })
}
