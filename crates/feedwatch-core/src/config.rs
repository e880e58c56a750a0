//! Configuration for the poller

use feedwatch_store::Paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::error::ConfigError;

pub const STORE_ENV: &str = "FEEDWATCH_STORE";
pub const INTERVAL_ENV: &str = "FEEDWATCH_INTERVAL";
pub const WEBHOOK_ENV: &str = "FEEDWATCH_WEBHOOK_URL";

/// Where each cycle's batch of records comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// JSON array of records written by an external scraper
    File { path: PathBuf },
    /// Endpoint returning a JSON array of records
    Http { url: String },
}

/// Poller configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Seen-record store file
    pub store_path: PathBuf,

    /// Delay between the start of consecutive cycles
    pub poll_interval: Duration,

    /// Absorb the first batch silently when the store starts empty
    pub bootstrap_on_empty: bool,

    pub source: SourceConfig,

    /// Notification webhook; new records go to stdout when unset
    pub webhook_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    store_path: Option<PathBuf>,
    #[serde(default)]
    poll_interval_secs: Option<u64>,
    #[serde(default)]
    bootstrap_on_empty: Option<bool>,
    #[serde(default)]
    source: Option<SourceConfig>,
    #[serde(default)]
    webhook_url: Option<String>,
}

impl Config {
    pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

    pub fn new(paths: &Paths) -> Self {
        Self {
            store_path: paths.store_file(),
            poll_interval: Duration::from_secs(Self::DEFAULT_POLL_INTERVAL_SECS),
            bootstrap_on_empty: true,
            source: SourceConfig::File {
                path: paths.feed_file(),
            },
            webhook_url: None,
        }
    }

    /// Load `feedwatch.json` (or `explicit`), then apply environment overrides.
    ///
    /// A missing default config file yields defaults; a malformed one is
    /// logged and ignored. An explicitly named file must exist.
    pub fn load(paths: &Paths, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| paths.config_file());

        let file = if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            match serde_json::from_str::<ConfigFile>(&content) {
                Ok(cf) => cf,
                Err(e) => {
                    warn!(path = %config_path.display(), error = %e, "ignoring malformed config file");
                    ConfigFile::default()
                }
            }
        } else if explicit.is_some() {
            return Err(ConfigError::Missing(config_path));
        } else {
            ConfigFile::default()
        };

        let mut config = Self::new(paths);
        if let Some(store_path) = file.store_path {
            config.store_path = store_path;
        }
        if let Some(secs) = file.poll_interval_secs {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(bootstrap) = file.bootstrap_on_empty {
            config.bootstrap_on_empty = bootstrap;
        }
        if let Some(source) = file.source {
            config.source = source;
        }
        config.webhook_url = file.webhook_url;

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(store) = env_value(STORE_ENV) {
            self.store_path = PathBuf::from(store);
        }
        if let Some(raw) = env_value(INTERVAL_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                var: INTERVAL_ENV,
                value: raw.clone(),
            })?;
            self.poll_interval = Duration::from_secs(secs);
        }
        if let Some(url) = env_value(WEBHOOK_ENV) {
            self.webhook_url = Some(url);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval.as_secs() == 0 {
            return Err(ConfigError::InvalidInterval(self.poll_interval.as_secs()));
        }
        Ok(())
    }
}

fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
