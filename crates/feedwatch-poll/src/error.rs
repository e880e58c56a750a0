use feedwatch_core::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a batch; aborts the current cycle only
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read feed {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to write notification: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PollError {
    /// Store failures stop the poller; source failures are retried next tick
    pub fn is_fatal(&self) -> bool {
        matches!(self, PollError::Store(_))
    }
}
