//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::adapters::probe_ffprobe::DEFAULT_FFPROBE;
use crate::adapters::TomlConfigAdapter;
use crate::output::OutputFormat;
use crate::ports::LogLevel;
use crate::utils::logging::{LogFormat, LoggingConfig};

pub const ENV_LOG_LEVEL: &str = "MEDIAMETA_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "MEDIAMETA_LOG_FORMAT";
pub const ENV_FFPROBE: &str = "MEDIAMETA_FFPROBE";
pub const ENV_OUTPUT_FORMAT: &str = "MEDIAMETA_OUTPUT_FORMAT";

/// One configuration layer; unset fields defer to lower layers
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub ffprobe_path: Option<String>,
    pub output_format: Option<OutputFormat>,
}

impl PartialConfig {
    /// Fields set in `upper` win over fields set in `self`
    pub fn overlay(self, upper: PartialConfig) -> PartialConfig {
        PartialConfig {
            log_level: upper.log_level.or(self.log_level),
            log_format: upper.log_format.or(self.log_format),
            ffprobe_path: upper.ffprobe_path.or(self.ffprobe_path),
            output_format: upper.output_format.or(self.output_format),
        }
    }
}

/// Effective, validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    pub ffprobe_path: String,
    pub output_format: OutputFormat,
    /// Config file that contributed to this configuration, if any
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::default(),
            ffprobe_path: DEFAULT_FFPROBE.to_string(),
            output_format: OutputFormat::default(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Apply a merged layer on top of the defaults and validate it
    pub fn from_partial(partial: PartialConfig, source: Option<PathBuf>) -> Result<Self> {
        let defaults = AppConfig::default();

        let log_level = match partial.log_level {
            Some(level) => LogLevel::parse(&level).context("Invalid log_level")?,
            None => defaults.log_level,
        };

        let ffprobe_path = partial.ffprobe_path.unwrap_or(defaults.ffprobe_path);
        if ffprobe_path.trim().is_empty() {
            anyhow::bail!("ffprobe_path cannot be empty");
        }

        Ok(Self {
            log_level,
            log_format: partial.log_format.unwrap_or(defaults.log_format),
            ffprobe_path,
            output_format: partial.output_format.unwrap_or(defaults.output_format),
            source,
        })
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(
    cli: PartialConfig,
    config_file: Option<&Path>,
) -> Result<AppConfig> {
    initialize_with_env(cli, config_file, |key| std::env::var(key).ok())
}

/// Same as [`initialize_configuration_hierarchy`] with an injectable environment
pub fn initialize_with_env<F>(
    cli: PartialConfig,
    config_file: Option<&Path>,
    env: F,
) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let from_file = match config_file {
        Some(path) => TomlConfigAdapter::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => PartialConfig::default(),
    };

    let merged = from_file
        .overlay(load_environment_variables(env)?)
        .overlay(cli);

    AppConfig::from_partial(merged, config_file.map(Path::to_path_buf))
}

/// Read `MEDIAMETA_*` overrides; empty variables count as unset
fn load_environment_variables<F>(env: F) -> Result<PartialConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    let log_format = var(ENV_LOG_FORMAT)
        .map(|value| LogFormat::from_str(&value, true))
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid {}: {}", ENV_LOG_FORMAT, e))?;

    let output_format = var(ENV_OUTPUT_FORMAT)
        .map(|value| OutputFormat::from_str(&value, true))
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid {}: {}", ENV_OUTPUT_FORMAT, e))?;

    Ok(PartialConfig {
        log_level: var(ENV_LOG_LEVEL),
        log_format,
        ffprobe_path: var(ENV_FFPROBE),
        output_format,
    })
}
