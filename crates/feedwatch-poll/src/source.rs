//! Producers of per-cycle record batches

use async_trait::async_trait;
use feedwatch_core::Record;
use std::path::PathBuf;
use tracing::debug;

use crate::error::SourceError;

/// Yields the current feed as an ordered batch of normalized records
#[async_trait]
pub trait RecordSource: Send {
    fn name(&self) -> &str;

    async fn fetch(&mut self) -> Result<Vec<Record>, SourceError>;
}

/// Reads a JSON array of records that an external scraper keeps up to date
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&mut self) -> Result<Vec<Record>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "read feed file");
        Ok(records)
    }
}

/// GETs a JSON array of records from an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&mut self) -> Result<Vec<Record>, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let records: Vec<Record> = response.json().await?;
        debug!(url = %self.url, count = records.len(), "fetched feed");
        Ok(records)
    }
}
