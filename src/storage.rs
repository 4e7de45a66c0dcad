//! Flat-file JSON storage backend.
//!
//! Each store is a single JSON array file holding the complete collection.
//! Loading is deliberately lenient: a missing or corrupt file is treated as
//! an empty collection so the application keeps running. Saving always
//! rewrites the whole file through a temporary file in the same directory,
//! so a crash mid-write never leaves a truncated store behind.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::{Result, TrackerError};

/// A flat JSON-array store for one collection of records.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a handle for the store at `path`. No I/O happens until
    /// `ensure`, `load`, or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guarantees the backing file exists, initializing it to an empty
    /// array if absent. Idempotent.
    pub fn ensure(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating store directory: {}", parent.display());
                fs::create_dir_all(parent).map_err(|e| {
                    error!("Failed to create directory {}: {}", parent.display(), e);
                    TrackerError::DirectoryError {
                        path: parent.to_path_buf(),
                    }
                })?;
            }
        }

        if !self.path.exists() {
            info!("Initializing empty store at {}", self.path.display());
            self.save(&[])?;
        }
        Ok(())
    }

    /// Loads the raw records from the backing file.
    ///
    /// A missing file, unreadable content, or JSON decode failure yields an
    /// empty collection after logging a warning; no error reaches the
    /// caller.
    pub fn load(&self) -> Vec<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Could not read store {}, treating as empty: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Store {} is corrupt, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Writes `records` as the complete new contents of the backing file,
    /// replacing whatever was there before.
    pub fn save(&self, records: &[Value]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
            error!("Failed to create temporary file in {}: {}", dir.display(), e);
            TrackerError::Io(e)
        })?;

        let json = serde_json::to_string_pretty(records)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;

        temp_file.persist(&self.path).map_err(|e| {
            error!(
                "Failed to persist store file {}: {}",
                self.path.display(),
                e
            );
            TrackerError::Io(e.error)
        })?;

        debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
