//! Path management for Money Tracker
//!
//! Provides platform-appropriate path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `MONEY_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by the `directories` crate
//!    (e.g. `~/.local/share/moneytracker` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Manages all paths used by Money Tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all Money Tracker data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory for the current environment
    ///
    /// `MONEY_TRACKER_DATA_DIR` takes precedence when set; otherwise the
    /// platform data directory from the `directories` crate is used.
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        if let Ok(custom) = std::env::var("MONEY_TRACKER_DATA_DIR") {
            return Ok(Self {
                base_dir: PathBuf::from(custom),
            });
        }

        let proj_dirs = ProjectDirs::from("com", "moneytracker", "MoneyTracker")
            .ok_or_else(|| TrackerError::Config("Could not determine data directory".into()))?;
        Ok(Self {
            base_dir: proj_dirs.data_dir().to_path_buf(),
        })
    }

    /// Root everything at an explicit directory, bypassing platform resolution
    ///
    /// Tests use this with a temp directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Base directory holding the settings file and the data subdirectory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the JSON stores (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Settings file (`<base>/config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Transaction store (`<base>/data/transactions.json`)
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Category store (`<base>/data/categories.json`)
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Create the directory tree if missing
    ///
    /// The data directory sits under the base directory, so one call covers
    /// both.
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
