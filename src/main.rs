//! mediameta CLI
//!
//! Prints one validated metadata record for a media file.
//!
//! # Usage
//!
//! ```bash
//! mediameta extract --input "video.mov"
//! mediameta extract --input "song.flac" --format yaml
//! mediameta formats
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use mediameta::adapters::TomlConfigAdapter;
use mediameta::cli::{commands, Cli, Commands};
use mediameta::config_initialization::initialize_configuration_hierarchy;
use mediameta::utils::logging::LoggingSystem;

/// Main entry point for the mediameta CLI
fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config_file = cli.config.clone().or_else(TomlConfigAdapter::discover);
    let config =
        initialize_configuration_hierarchy(cli.config_overrides(), config_file.as_deref())?;

    // Initialize logging
    LoggingSystem::new(config.logging()).initialize()?;

    info!("Starting mediameta {}", env!("CARGO_PKG_VERSION"));
    if let Some(source) = &config.source {
        info!("Loaded configuration from: {}", source.display());
    }

    // Execute the requested command
    match cli.command {
        Commands::Extract(args) => commands::extract(args, &config),
        Commands::Formats => commands::formats(),
    }
}
