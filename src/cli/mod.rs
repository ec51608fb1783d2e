//! # CLI Module
//!
//! The command-line interface layer for SoundStories. Each command loads the
//! state store, performs one operation and renders the result with the crate's
//! status macros and `tabled` tables.
//!
//! ## Command Categories
//!
//! ### Admin
//!
//! - [`add`] - Validates the entry form and stores a new recommendation
//! - [`update`] - Merges changed fields into an existing recommendation
//! - [`delete`] - Removes a recommendation after confirmation
//! - [`search`] - Looks up tracks in the demo catalog or resolves a pasted link
//!
//! ### Subscribers
//!
//! - [`subscribe`] - Calendar subscription link and setup instructions
//! - [`preview_email`] - Renders the weekly mail for the latest recommendation
//! - [`playlist`] / [`playlist_tracks`] - Playlist link and track list export
//!
//! ### Views
//!
//! - [`list`] - Upcoming and past recommendations
//! - [`stats`] - Summary cards
//!
//! ## Error Handling
//!
//! Validation failures end the command through `error!` before anything is
//! written, so the state file always holds the last successful state. Clipboard
//! problems only produce a warning and a console copy of the text.
//!
//! ## Usage Patterns
//!
//! ```bash
//! soundstories add --search "queen" --story "..." --date "2026-11-06 07:00"
//! soundstories add --title "Song - Artist" --story "..." --image cover.png
//! soundstories list --upcoming
//! soundstories playlist --url https://open.spotify.com/playlist/...
//! soundstories playlist tracks --copy
//! ```

mod add;
mod clipboard;
mod list;
mod playlist;
mod search;
mod stats;
mod subscribe;
mod update;

pub use add::AddInput;
pub use add::add;
pub use list::list;
pub use playlist::playlist;
pub use playlist::playlist_tracks;
pub use search::search;
pub use stats::stats;
pub use subscribe::preview_email;
pub use subscribe::subscribe;
pub use update::UpdateInput;
pub use update::delete;
pub use update::update;
