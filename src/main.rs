// Devscout - find developers near you by the technologies they use
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use devscout::cli::{self, BrowseArgs, SearchArgs};
use devscout::config::{load_config_from, resolve_config_path};
use devscout::logging;

#[derive(Debug, Parser)]
#[command(name = "devscout", version, about = "Discover developers near you by technology")]
struct Cli {
    /// Config file (defaults to ~/.devscout/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load everyone, locate, optionally search, and show the map
    Browse(BrowseArgs),
    /// Search around a coordinate
    Search(SearchArgs),
    /// Print a developer's profile URL
    Profile {
        /// GitHub username
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Load configuration
    let config_path = resolve_config_path(args.config.as_deref())?;
    let config = load_config_from(&config_path)?;

    // Initialize tracing
    logging::init(args.verbose || config.features.debug_logging);
    if !config_path.exists() {
        tracing::debug!("No config at {}, using defaults", config_path.display());
    }

    let output = match args.command {
        Command::Browse(browse) => cli::browse(&config, browse).await?,
        Command::Search(search) => cli::search(&config, search).await?,
        Command::Profile { username } => format!("{}\n", cli::profile(&config, &username)),
    };
    print!("{}", output);

    Ok(())
}
