use std::{fmt, path::Path};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::types::{Recommendation, RecommendationTableRow};

/// Recommendations split around a reference time.
#[derive(Debug)]
pub struct Partition<'a> {
    /// Scheduled strictly after the reference time, soonest first.
    pub upcoming: Vec<&'a Recommendation>,
    /// Scheduled at or before the reference time, most recent first.
    pub past: Vec<&'a Recommendation>,
}

pub fn partition_recommendations(
    recommendations: &[Recommendation],
    now: DateTime<Utc>,
) -> Partition<'_> {
    let (mut upcoming, mut past): (Vec<&Recommendation>, Vec<&Recommendation>) =
        recommendations.iter().partition(|r| r.scheduled_date > now);

    // sort_by is stable, equal dates keep collection order
    upcoming.sort_by(|a, b| a.scheduled_date.cmp(&b.scheduled_date));
    past.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));

    Partition { upcoming, past }
}

pub fn default_scheduled_date(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(7)
}

/// Parses a user supplied schedule.
///
/// Accepts RFC 3339 timestamps as well as `YYYY-MM-DDTHH:MM`,
/// `YYYY-MM-DD HH:MM` and `YYYY-MM-DD`; the last three are read as local time.
pub fn parse_scheduled_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn format_schedule(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%A, %B %-d, %Y, %I:%M %p")
        .to_string()
}

/// Trimmed copy of `value`, or `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn build_table_rows(recommendations: &[&Recommendation]) -> Vec<RecommendationTableRow> {
    recommendations
        .iter()
        .map(|r| RecommendationTableRow {
            id: r.id,
            date: format_schedule(r.scheduled_date),
            title: r.title.clone(),
            story: truncate(&r.story, 60),
            links: link_badges(r),
        })
        .collect()
}

fn link_badges(recommendation: &Recommendation) -> String {
    let mut badges: Vec<&str> = Vec::new();
    if recommendation.spotify_url().is_some() {
        badges.push("Spotify");
    }
    if recommendation.youtube_url().is_some() {
        badges.push("YouTube");
    }
    let others: Vec<&str> = recommendation
        .other_links
        .iter()
        .map(|l| l.platform.as_str())
        .collect();
    badges.extend(others);
    badges.join(", ")
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<&str>>().join(" ");
    if flat.chars().count() > max_chars {
        format!("{}…", flat.chars().take(max_chars).collect::<String>())
    } else {
        flat
    }
}

#[derive(Debug)]
pub enum ImageError {
    IoError(std::io::Error),
    NotAnImage(String),
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::IoError(err)
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::IoError(e) => write!(f, "cannot read image: {}", e),
            ImageError::NotAnImage(path) => write!(f, "{} is not an image file", path),
        }
    }
}

impl std::error::Error for ImageError {}

pub fn is_image_reference(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:")
}

/// Turns an image argument into the stored representation.
///
/// URLs (including `data:` URLs) are kept verbatim, anything else is read from
/// disk and embedded as a base64 data URL.
pub async fn resolve_image(input: &str) -> Result<String, ImageError> {
    let input = input.trim();
    if is_image_reference(input) {
        return Ok(input.to_string());
    }

    let path = Path::new(input);
    let bytes = async_fs::read(path).await?;
    let mime = image_mime_type(path, &bytes)
        .ok_or_else(|| ImageError::NotAnImage(path.display().to_string()))?;

    Ok(encode_data_url(&mime, &bytes))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

fn image_mime_type(path: &Path, bytes: &[u8]) -> Option<String> {
    if let Some(kind) = infer::get(bytes) {
        return kind
            .mime_type()
            .starts_with("image/")
            .then(|| kind.mime_type().to_string());
    }

    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime.to_string())
}
