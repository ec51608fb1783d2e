//! SoundStories Curation Library
//!
//! This library provides the building blocks for curating and scheduling music
//! recommendations. Every recommendation carries a story, an image and optional
//! links, and is scheduled for delivery through a subscribed calendar feed. All
//! state lives in a single JSON document in the user's local data directory.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - State store, entry form and playlist panel logic
//! - `spotify` - Demo track catalog and debounced search
//! - `types` - Data structures and type definitions
//! - `utils` - Date handling, list derivation and image helpers
//!
//! # Example
//!
//! ```
//! use soundstories::{config, management::AppStore};
//!
//! #[tokio::main]
//! async fn main() -> soundstories::Res<()> {
//!     config::load_env().await?;
//!     let store = AppStore::load().await;
//!     println!("{} recommendations", store.state().recommendations.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading recommendations...");
/// info!("Found {} upcoming recommendations", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Recommendation added successfully!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the CLI layer uses it; library
/// code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Cannot save recommendations: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as an unreadable state file or an
/// unavailable clipboard.
///
/// # Example
///
/// ```
/// warning!("Error loading data: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
