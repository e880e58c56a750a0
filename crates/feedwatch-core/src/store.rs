//! JSON file persistence for the seen-set

use feedwatch_store::{atomic_write, read_json_array, ArrayFile};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::StoreError;
use crate::record::Record;
use crate::seen::SeenSet;

/// How the store file looked when it was loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// File was missing and has been created as `[]`
    Created,
    /// File parsed cleanly
    Loaded,
    /// File was unreadable as a record array and was treated as empty
    Corrupt,
}

/// File-backed store holding one JSON array element per seen fingerprint
#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<SeenSet, StoreError> {
        self.load_with_state().map(|(seen, _)| seen)
    }

    /// Load the seen-set, reporting whether the file was created, parsed or corrupt
    pub fn load_with_state(&self) -> Result<(SeenSet, LoadState), StoreError> {
        let file: ArrayFile<Record> = read_json_array(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        match file {
            ArrayFile::Created => Ok((SeenSet::new(), LoadState::Created)),
            ArrayFile::Corrupt(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unable to read seen store, proceeding as if it were empty"
                );
                Ok((SeenSet::new(), LoadState::Corrupt))
            }
            ArrayFile::Loaded(records) => {
                if let Some(bad) = records.iter().find(|r| !r.is_supported_schema()) {
                    warn!(
                        path = %self.path.display(),
                        schema_version = bad.schema_version,
                        "seen store has unsupported schema version, proceeding as if it were empty"
                    );
                    return Ok((SeenSet::new(), LoadState::Corrupt));
                }
                Ok((SeenSet::from_records(records), LoadState::Loaded))
            }
        }
    }

    /// Replace the file's contents with the full seen-set
    pub fn save(&self, seen: &SeenSet) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(seen.records())?;
        atomic_write(&self.path, json.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
