use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slidewheel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "slidewheel")]
#[command(author, version, about = "A gesture-driven slide carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Slide label; repeat to build the deck (shorthand for `run --slide`)
    #[arg(short = 's', long = "slide")]
    slides: Vec<String>,

    /// Render the full-screen hero layout instead of the compact page
    #[arg(long)]
    full: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Slide label; repeat to build the deck
        #[arg(short = 's', long = "slide")]
        slides: Vec<String>,

        /// Render the full-screen hero layout instead of the compact page
        #[arg(long)]
        full: bool,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load()?;
    tracing::debug!(path = %AppConfig::config_path().display(), "configuration loaded");

    match cli.command {
        Some(Commands::Run { slides, full }) => commands::run::run(config, slides, full).await,
        None => commands::run::run(config, cli.slides, cli.full).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(&config),
        },
    }
}
