use chrono::Utc;

use crate::{
    error, info,
    management::{AppStore, RecommendationForm, STORY_WORD_TARGET},
    success,
    types::ExternalLink,
    utils, warning,
};

use super::search::{first_track, run_search};

/// Raw admin form input as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct AddInput {
    pub search: Option<String>,
    pub title: Option<String>,
    pub story: Option<String>,
    pub spotify_link: Option<String>,
    pub youtube_link: Option<String>,
    pub other_links: Vec<ExternalLink>,
    pub image: Option<String>,
    pub scheduled_date: Option<String>,
}

pub async fn add(input: AddInput) {
    let mut form = RecommendationForm::new();

    if let Some(query) = &input.search {
        match first_track(run_search(query).await) {
            Some(track) => {
                info!("Selected {}", track.display_title());
                form.select_track(track);
            }
            None => warning!("No track found for '{}'.", query),
        }
    }

    // explicit arguments win over values taken from the selected track
    if let Some(title) = input.title {
        form.title = title;
    }
    if let Some(story) = input.story {
        form.story = story;
    }
    if let Some(link) = input.spotify_link {
        form.spotify_link = link;
    }
    if let Some(link) = input.youtube_link {
        form.youtube_link = link;
    }
    form.other_links = input.other_links;
    if let Some(date) = input.scheduled_date {
        form.scheduled_date = date;
    }
    if let Some(image) = input.image {
        match utils::resolve_image(&image).await {
            Ok(image) => form.image = image,
            Err(e) => error!("{}", e),
        }
    }

    let words = form.word_count();
    if form.exceeds_word_target() {
        warning!("Story: {}/{} words", words, STORY_WORD_TARGET);
    } else {
        info!("Story: {}/{} words", words, STORY_WORD_TARGET);
    }

    let mut store = AppStore::load().await;
    match form.submit(&mut store, Utc::now()).await {
        Ok(recommendation) => {
            success!("Recommendation added successfully!");
            info!(
                "#{} scheduled for {}",
                recommendation.id,
                utils::format_schedule(recommendation.scheduled_date)
            );
        }
        Err(e) => error!("{}", e),
    }
}
