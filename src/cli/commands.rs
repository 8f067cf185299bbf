//! Command implementations

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::args::ExtractArgs;
use crate::config_initialization::AppConfig;
use crate::output::summary::{log_quick_view, supported_formats_lines};
use crate::output::writer::RecordWriter;

/// Exit status when extraction produced no record
pub const EXIT_NO_RECORD: u8 = 1;
/// Exit status when the input file does not exist
pub const EXIT_NOT_FOUND: u8 = 2;

/// Execute the extract command
pub fn extract(args: ExtractArgs, config: &AppConfig) -> Result<ExitCode> {
    info!("Starting extract operation");
    info!("Input: {}", args.input.display());

    let container = DefaultAppContainer::new(&config.ffprobe_path);
    let log = container.log_port();

    let record = match container.extract_interactor().extract(&args.input) {
        Ok(Some(record)) => record,
        Ok(None) => {
            log.error(&format!(
                "No metadata record produced for {}",
                args.input.display()
            ));
            return Ok(ExitCode::from(EXIT_NO_RECORD));
        }
        Err(e) if e.is_not_found() => {
            log.critical(&format!("FATAL ERROR: {}", e));
            return Ok(ExitCode::from(EXIT_NOT_FOUND));
        }
        Err(e) => return Err(e).context("Metadata extraction failed"),
    };

    let rendered = RecordWriter::new(config.output_format)
        .render(&record)
        .context("Failed to render metadata record")?;
    println!("{}", rendered.trim_end());

    if !args.no_summary {
        log_quick_view(&record, log.as_ref());
    }

    info!("Extract operation completed successfully");
    Ok(ExitCode::SUCCESS)
}

/// Execute the formats command
pub fn formats() -> Result<ExitCode> {
    println!("--- Supported Formats Overview ---");
    for line in supported_formats_lines() {
        println!("  {}", line);
    }
    Ok(ExitCode::SUCCESS)
}
