//! Path resolution for feedwatch state files

use std::path::PathBuf;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "FEEDWATCH_HOME";

/// Resolves standard paths for config, store and feed files
#[derive(Debug, Clone)]
pub struct Paths {
    pub base_dir: PathBuf,
}

impl Paths {
    /// Resolve the base directory from `FEEDWATCH_HOME`, falling back to `~/.feedwatch`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_base(PathBuf::from(dir)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_base(home.join(".feedwatch")))
    }

    pub fn with_base(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get feedwatch.json path
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("feedwatch.json")
    }

    /// Get seen.json path (default store location)
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("seen.json")
    }

    /// Get feed.json path (default file source)
    pub fn feed_file(&self) -> PathBuf {
        self.base_dir.join("feed.json")
    }
}
