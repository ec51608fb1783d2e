use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use soundstories::{
    cli::{self, AddInput, UpdateInput},
    config,
    management::parse_external_link,
    types::ExternalLink,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new recommendation
    Add(AddOptions),

    /// List upcoming and past recommendations
    List(ListOptions),

    /// Change fields of an existing recommendation
    Update(UpdateOptions),

    /// Delete a recommendation
    Delete(DeleteOptions),

    /// Search Spotify (demo mode) or resolve a pasted track link
    Search(SearchOptions),

    /// Show the calendar subscription link and setup steps
    Subscribe(SubscribeOptions),

    /// Preview the weekly email for the latest recommendation
    PreviewEmail(PreviewEmailOptions),

    /// Manage the SoundStories Spotify playlist
    Playlist(PlaylistOptions),

    /// Show summary statistics
    Stats,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// Search query or Spotify track link used to prefill title, link and image
    #[clap(long)]
    pub search: Option<String>,

    /// Song title and artist, e.g. "Bohemian Rhapsody - Queen"
    #[clap(long)]
    pub title: Option<String>,

    /// The story behind this recommendation
    #[clap(long)]
    pub story: Option<String>,

    #[clap(long)]
    pub spotify: Option<String>,

    #[clap(long)]
    pub youtube: Option<String>,

    /// Additional link as platform=url; can be repeated
    #[clap(long = "link", value_parser = parse_external_link, action = ArgAction::Append)]
    pub links: Vec<ExternalLink>,

    /// Image file or URL
    #[clap(long)]
    pub image: Option<String>,

    /// Scheduled date (YYYY-MM-DD HH:MM), defaults to one week from now
    #[clap(long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show upcoming recommendations
    #[clap(long, conflicts_with = "past")]
    pub upcoming: bool,

    /// Only show published recommendations
    #[clap(long)]
    pub past: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateOptions {
    pub id: i64,

    #[clap(long)]
    pub title: Option<String>,

    #[clap(long)]
    pub story: Option<String>,

    #[clap(long)]
    pub spotify: Option<String>,

    #[clap(long)]
    pub youtube: Option<String>,

    /// Replace the additional links; can be repeated
    #[clap(long = "link", value_parser = parse_external_link, action = ArgAction::Append)]
    pub links: Vec<ExternalLink>,

    #[clap(long)]
    pub image: Option<String>,

    #[clap(long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteOptions {
    pub id: i64,

    /// Skip the confirmation prompt
    #[clap(long, short)]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    pub query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SubscribeOptions {
    /// Copy the calendar link to the clipboard
    #[clap(long)]
    pub copy: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewEmailOptions {
    pub email: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Manage the SoundStories Spotify playlist",
    args_conflicts_with_subcommands = true // disallow mixing --url with `tracks`
)]
pub struct PlaylistOptions {
    /// Save the Spotify playlist URL
    #[clap(long)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<PlaylistSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// Generate the track list of all recommendations with Spotify links
    Tracks(PlaylistTracksOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistTracksOpts {
    /// Copy the list to the clipboard instead of printing it
    #[clap(long)]
    pub copy: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Add(opt) => {
            cli::add(AddInput {
                search: opt.search,
                title: opt.title,
                story: opt.story,
                spotify_link: opt.spotify,
                youtube_link: opt.youtube,
                other_links: opt.links,
                image: opt.image,
                scheduled_date: opt.date,
            })
            .await
        }
        Command::List(opt) => cli::list(opt.upcoming, opt.past).await,
        Command::Update(opt) => {
            cli::update(
                opt.id,
                UpdateInput {
                    title: opt.title,
                    story: opt.story,
                    spotify_link: opt.spotify,
                    youtube_link: opt.youtube,
                    other_links: opt.links,
                    image: opt.image,
                    scheduled_date: opt.date,
                },
            )
            .await
        }
        Command::Delete(opt) => cli::delete(opt.id, opt.yes).await,
        Command::Search(opt) => cli::search(opt.query).await,
        Command::Subscribe(opt) => cli::subscribe(opt.copy).await,
        Command::PreviewEmail(opt) => cli::preview_email(opt.email).await,
        Command::Playlist(opt) => match opt.command {
            Some(PlaylistSubcommand::Tracks(t)) => cli::playlist_tracks(t.copy).await,
            None => cli::playlist(opt.url).await,
        },
        Command::Stats => cli::stats().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
