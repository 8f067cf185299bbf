//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Input media file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format for the record (default: json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// ffprobe executable to run
    #[arg(long)]
    pub ffprobe: Option<String>,

    /// Skip the quick view log lines after the record
    #[arg(long)]
    pub no_summary: bool,
}
