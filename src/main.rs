use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use settings_loader::{load_settings, DEFAULT_SETTINGS_PATH};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Loads the project settings and prints the values the pipeline relies on.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file to load.
    #[arg(default_value = DEFAULT_SETTINGS_PATH)]
    path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = load_settings(&cli.path)
        .with_context(|| format!("could not load settings from {}", cli.path.display()))?;

    let project_name = settings.get_str(&["project", "name"])?;
    let base_path = settings.get_str(&["storage", "base_path"])?;
    let realtime_page =
        settings.get_str(&["datasets", "realtime_bus_positions", "dataset_page"])?;

    println!("Settings loaded successfully.");
    println!("Project: {project_name}");
    println!("Base path: {base_path}");
    println!("Realtime dataset page: {realtime_page}");

    Ok(())
}
