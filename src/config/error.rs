//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON document did not describe a configuration
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document did not describe a configuration
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension does not name a supported format
    #[error("Unsupported configuration format '{0}', expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
}
