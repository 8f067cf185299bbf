//! Record rendering and console summaries

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod summary;
pub mod writer;

/// Format the extracted record is printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML document
    Yaml,
    /// Human-readable text
    Text,
}
