//! Error types for the newness cache and its configuration

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable failures of the persistent store.
///
/// Malformed store content is not an error; it is logged and treated as an
/// empty seen-set.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize seen records: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("poll interval must be at least 1 second, got {0}")]
    InvalidInterval(u64),

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}
