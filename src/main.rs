use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spoytcli::{cli, config, error, types::Platform};

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
    /// Authorize with the Spotify and YouTube APIs
    Auth(AuthOptions),

    /// List Spotify or YouTube playlists
    Playlists(PlaylistsOptions),

    #[clap(about = "Migrate Spotify playlists to YouTube")]
    Sync(SyncOptions),

    /// Delete a YouTube playlist by name
    Delete(DeleteOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PlatformArg {
    Spotify,
    Youtube,
    All,
}

impl PlatformArg {
    fn platforms(self) -> Vec<Platform> {
        match self {
            PlatformArg::Spotify => vec![Platform::Spotify],
            PlatformArg::Youtube => vec![Platform::Youtube],
            PlatformArg::All => vec![Platform::Spotify, Platform::Youtube],
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Platform to authorize against
    #[clap(long, value_enum, default_value = "all")]
    pub platform: PlatformArg,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// List YouTube playlists instead of Spotify playlists
    #[clap(long)]
    pub youtube: bool,

    /// Show the tracks of one Spotify playlist
    #[clap(long, conflicts_with = "youtube")]
    pub tracks: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Name of the Spotify playlist to migrate
    #[clap(long)]
    pub playlist: Option<String>,

    /// Migrate all Spotify playlists
    #[clap(long, conflicts_with = "playlist")]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteOptions {
    /// Name of the YouTube playlist to delete
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.platform.platforms()).await,
        Command::Playlists(opt) => cli::playlists(opt.youtube, opt.tracks).await,
        Command::Sync(opt) => cli::sync(opt.playlist, opt.all).await,
        Command::Delete(opt) => cli::delete(opt.name).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
