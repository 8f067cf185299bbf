// TOML config adapter - Configuration file loading

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config_initialization::PartialConfig;
use crate::domain::errors::*;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "mediameta.toml";

/// Layout of the configuration file: everything lives under `[mediameta]`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    mediameta: PartialConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse configuration from TOML text
    pub fn parse(toml_content: &str) -> Result<PartialConfig, DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::BadArgs(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.mediameta)
    }

    /// Load configuration from file
    pub fn load(file_path: &Path) -> Result<PartialConfig, DomainError> {
        if !file_path.exists() {
            return Err(DomainError::FsFail(format!(
                "Config file does not exist: {}",
                file_path.display()
            )));
        }

        let content = std::fs::read_to_string(file_path)
            .map_err(|e| DomainError::FsFail(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// Candidate config files, most specific first
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = Self::user_config_dir() {
            paths.push(dir.join("mediameta").join("config.toml"));
        }
        paths
    }

    /// First existing default config file
    pub fn discover() -> Option<PathBuf> {
        Self::default_config_paths().into_iter().find(|p| p.exists())
    }

    fn user_config_dir() -> Option<PathBuf> {
        // %APPDATA% on Windows, XDG layout elsewhere
        if cfg!(windows) {
            return std::env::var_os("APPDATA").map(PathBuf::from);
        }
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
    }
}
