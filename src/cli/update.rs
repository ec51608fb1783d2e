use std::io::{self, BufRead, Write};

use crate::{
    error, info,
    management::AppStore,
    types::{ExternalLink, RecommendationUpdate},
    success, utils, warning,
};

#[derive(Debug, Clone, Default)]
pub struct UpdateInput {
    pub title: Option<String>,
    pub story: Option<String>,
    pub spotify_link: Option<String>,
    pub youtube_link: Option<String>,
    pub other_links: Vec<ExternalLink>,
    pub image: Option<String>,
    pub scheduled_date: Option<String>,
}

pub async fn update(id: i64, input: UpdateInput) {
    let scheduled_date = match input.scheduled_date {
        Some(raw) => match utils::parse_scheduled_date(&raw) {
            Some(date) => Some(date),
            None => error!("Cannot read scheduled date '{}', use YYYY-MM-DD HH:MM", raw),
        },
        None => None,
    };

    let image = match input.image {
        Some(raw) => match utils::resolve_image(&raw).await {
            Ok(image) => Some(image),
            Err(e) => error!("{}", e),
        },
        None => None,
    };

    let update = RecommendationUpdate {
        title: input.title,
        story: input.story,
        spotify_link: input.spotify_link,
        youtube_link: input.youtube_link,
        other_links: (!input.other_links.is_empty()).then_some(input.other_links),
        image,
        scheduled_date,
    };

    if update.is_empty() {
        warning!("Nothing to update.");
        return;
    }

    let mut store = AppStore::load().await;
    match store.update_recommendation(id, update).await {
        Ok(true) => success!("Recommendation #{} updated.", id),
        Ok(false) => warning!("No recommendation with id {}.", id),
        Err(e) => error!("Cannot update recommendation: {}", e),
    }
}

pub async fn delete(id: i64, assume_yes: bool) {
    let mut store = AppStore::load().await;
    let title = match store.state().find(id) {
        Some(recommendation) => recommendation.title.clone(),
        None => {
            warning!("No recommendation with id {}.", id);
            return;
        }
    };

    if !assume_yes && !confirm(&format!("Delete '{}'?", title)) {
        info!("Nothing deleted.");
        return;
    }

    match store.delete_recommendation(id).await {
        Ok(true) => success!("Recommendation #{} deleted.", id),
        Ok(false) => warning!("No recommendation with id {}.", id),
        Err(e) => error!("Cannot delete recommendation: {}", e),
    }
}

fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
