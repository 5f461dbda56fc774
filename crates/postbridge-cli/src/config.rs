//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables (`POSTBRIDGE_CONFIG`, via the CLI)
//!
//! The `mapper` section overrides the defaults of
//! [`postbridge_core::MapperConfig`]; the `logging` section is merged under
//! the verbosity flags.

use crate::error::{Error, Result};
use crate::logging::LogFormat;
use postbridge_core::MapperConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the generated documents
    pub mapper: MapperConfig,

    /// Logging settings
    pub logging: LoggingSettings,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Logging settings from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "configuration file {} does not exist",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;

        let mut config: Config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".postbridge.yaml"),
            PathBuf::from(".postbridge.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let postbridge_dir = config_dir.join("postbridge");
            paths.push(postbridge_dir.join("config.yaml"));
            paths.push(postbridge_dir.join("config.json"));
        }

        paths
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}
