mod form;
mod playlist;
mod store;

pub use form::FormError;
pub use form::RecommendationForm;
pub use form::STORY_WORD_TARGET;
pub use form::parse_external_link;
pub use playlist::EMAIL_SUBJECT;
pub use playlist::EmailPreview;
pub use playlist::PLAYLIST_URL_MARKER;
pub use playlist::PlaylistError;
pub use playlist::email_preview;
pub use playlist::generate_track_list;
pub use playlist::save_playlist_url;
pub use playlist::spotify_track_count;
pub use playlist::validate_playlist_url;
pub use store::AppStore;
pub use store::StoreError;
