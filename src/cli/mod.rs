//! CLI module for mediameta
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config_initialization::PartialConfig;
use crate::utils::logging::LogFormat;

pub mod args;
pub mod commands;

/// mediameta
///
/// Extracts duration, codec, bitrate, resolution and tag metadata from a
/// single media file by reconciling ffprobe output with embedded tags.
#[derive(Parser, Debug)]
#[command(name = "mediameta")]
#[command(about = "Reconcile ffprobe and embedded tag metadata into one record")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error, critical)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log line format
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Configuration file (TOML, `[mediameta]` table)
    #[arg(long, global = true, env = "MEDIAMETA_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the metadata record of a media file
    Extract(args::ExtractArgs),
    /// List the file formats each metadata source supports
    Formats,
}

impl Cli {
    /// Configuration values given on the command line
    pub fn config_overrides(&self) -> PartialConfig {
        let (ffprobe_path, output_format) = match &self.command {
            Commands::Extract(args) => (args.ffprobe.clone(), args.format),
            Commands::Formats => (None, None),
        };

        PartialConfig {
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            ffprobe_path,
            output_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from([
            "mediameta",
            "--log-level",
            "debug",
            "extract",
            "--input",
            "clip.mov",
            "--format",
            "yaml",
            "--ffprobe",
            "/usr/local/bin/ffprobe",
        ])
        .unwrap();

        let overrides = cli.config_overrides();
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert_eq!(overrides.output_format, Some(OutputFormat::Yaml));
        assert_eq!(overrides.ffprobe_path.as_deref(), Some("/usr/local/bin/ffprobe"));

        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.input, PathBuf::from("clip.mov"));
                assert!(!args.no_summary);
            }
            Commands::Formats => panic!("expected extract"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mediameta", "formats", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.config_overrides().output_format, None);
    }

    #[test]
    fn test_extract_requires_input() {
        assert!(Cli::try_parse_from(["mediameta", "extract"]).is_err());
        assert!(
            Cli::try_parse_from(["mediameta", "extract", "-i", "a.mp4", "--format", "xml"]).is_err()
        );
    }
}
