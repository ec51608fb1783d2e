use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub platform: String,
    pub url: String,
}

/// One curated music suggestion with its story, links, image and schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub title: String,
    pub story: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,
    #[serde(default)]
    pub other_links: Vec<ExternalLink>,
    pub image: String,
    #[serde(deserialize_with = "deserialize_schedule")]
    pub scheduled_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_data: Option<SpotifyTrack>,
}

impl Recommendation {
    /// Spotify link, ignoring blank values.
    pub fn spotify_url(&self) -> Option<&str> {
        non_blank_ref(self.spotify_link.as_deref())
    }

    /// YouTube link, ignoring blank values.
    pub fn youtube_url(&self) -> Option<&str> {
        non_blank_ref(self.youtube_link.as_deref())
    }
}

fn non_blank_ref(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// older documents store the raw `YYYY-MM-DDTHH:MM` form value
fn deserialize_schedule<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    crate::utils::parse_scheduled_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid scheduled date '{}'", raw)))
}

/// Fields of a recommendation before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecommendation {
    pub title: String,
    pub story: String,
    pub spotify_link: Option<String>,
    pub youtube_link: Option<String>,
    pub other_links: Vec<ExternalLink>,
    pub image: String,
    pub scheduled_date: DateTime<Utc>,
    pub spotify_data: Option<SpotifyTrack>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationUpdate {
    pub title: Option<String>,
    pub story: Option<String>,
    pub spotify_link: Option<String>,
    pub youtube_link: Option<String>,
    pub other_links: Option<Vec<ExternalLink>>,
    pub image: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
}

impl RecommendationUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The single persisted aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub subscribers: Vec<serde_json::Value>,
    #[serde(default)]
    pub calendar_events: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_playlist_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub duration_ms: u64,
}

impl SpotifyTrack {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<String>>()
            .join(", ")
    }

    pub fn cover_url(&self) -> Option<&str> {
        self.album.images.first().map(|i| i.url.as_str())
    }

    /// `"{name} - {artists}"`, the label used for form titles.
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.name, self.artist_names())
    }
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub story: String,
    pub links: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub year: String,
    pub popularity: String,
}
