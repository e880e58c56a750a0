//! JSON array I/O and atomic file operations

use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What was found on disk when reading a JSON array file
#[derive(Debug)]
pub enum ArrayFile<T> {
    /// The file did not exist and was created holding `[]`
    Created,
    /// The file parsed; a blank file reads as an empty array
    Loaded(Vec<T>),
    /// The file exists but is not a JSON array of `T`
    Corrupt(serde_json::Error),
}

impl<T> ArrayFile<T> {
    /// Collapse to the loaded entries, treating created and corrupt files as empty
    pub fn into_entries(self) -> Vec<T> {
        match self {
            ArrayFile::Loaded(entries) => entries,
            ArrayFile::Created | ArrayFile::Corrupt(_) => Vec::new(),
        }
    }
}

/// Read a JSON array file, creating it as `[]` when missing.
///
/// Unparseable content (including bytes that are not UTF-8) is reported as
/// [`ArrayFile::Corrupt`] rather than an error; only genuine I/O failures are
/// returned as `Err`.
pub fn read_json_array<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<ArrayFile<T>> {
    if !path.exists() {
        atomic_write(path, b"[]")?;
        return Ok(ArrayFile::Created);
    }

    let contents = std::fs::read(path)?;
    let trimmed = contents.trim_ascii();
    if trimmed.is_empty() {
        return Ok(ArrayFile::Loaded(Vec::new()));
    }

    match serde_json::from_slice(trimmed) {
        Ok(entries) => Ok(ArrayFile::Loaded(entries)),
        Err(e) => Ok(ArrayFile::Corrupt(e)),
    }
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    // Persist the rename itself
    #[cfg(unix)]
    File::open(parent.unwrap_or(Path::new(".")))?.sync_all()?;

    Ok(())
}

/// Sibling temp file: the full file name plus `.tmp`, never the target itself
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
