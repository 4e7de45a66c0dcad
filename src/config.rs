use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the JSON stores live
    pub data_dir: PathBuf,

    /// Default number of hours the scheduler may allocate
    pub available_hours: f64,
}

impl Config {
    /// Builds a configuration using `data_dir` when given, falling back to
    /// the platform data directory and finally to a local `data/` folder.
    pub fn with_data_dir(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir
            .or_else(|| dirs::data_dir().map(|dir| dir.join("dltracker")))
            .unwrap_or_else(|| PathBuf::from("data"));

        Self {
            data_dir,
            available_hours: crate::DEFAULT_AVAILABLE_HOURS,
        }
    }

    /// Path of the notes store.
    pub fn notes_file(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Path of the assignments store.
    pub fn assignments_file(&self) -> PathBuf {
        self.data_dir.join("assignments.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_dir(None)
    }
}
