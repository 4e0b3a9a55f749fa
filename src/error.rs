use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a configuration document
///
/// None of these reach callers of [`crate::config::load_config`]; the store
/// logs them and keeps its defaults. [`crate::config::try_load`] returns them
/// for callers that want to act on a bad file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration file: {0}")]
    Structure(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
