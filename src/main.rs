mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uurrooster_core::config::StoreConfig;

#[derive(Parser)]
#[command(name = "uurrooster")]
#[command(about = "Inspect your class schedule")]
struct Cli {
    /// Fixture to load instead of the configured one (default: bundled schedule)
    #[arg(short, long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events, most recent first
    List,
    /// Show a single event
    Show { id: String },
    /// Validate the fixture
    Check,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uurrooster=info,uurrooster_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = StoreConfig::load().context("Failed to load configuration")?;
    if let Some(path) = cli.fixture {
        config = config.with_fixture_path(path);
    }

    match cli.command {
        Commands::List => commands::list::run(config).await,
        Commands::Show { id } => commands::show::run(config, &id).await,
        Commands::Check => commands::check::run(config).await,
    }
}
