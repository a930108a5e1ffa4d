//! Error types for config and state file loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config format '{extension}' (expected .json or .toml)")]
    UnsupportedFormat { extension: String },

    #[error("{path} must contain an object at the top level")]
    NotAnObject { path: PathBuf },

    #[error("failed to load settings")]
    LoadSettings(#[from] confy::ConfyError),

    #[error("failed to save settings")]
    SaveSettings(#[source] confy::ConfyError),
}
