//! Storage layer for Money Tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod categories;
pub mod file_io;
pub mod transactions;

pub use categories::{CategoryRepository, DEFAULT_CATEGORIES};
pub use file_io::{read_json, read_json_or_else, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> TrackerResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> TrackerResult<()> {
        self.transactions.load()?;
        self.categories.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_directory_tree() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());

        let storage = Storage::new(paths).unwrap();

        assert!(dir.path().join("data").exists());
        assert!(storage.transactions.is_empty());
    }

    #[test]
    fn test_load_all_seeds_categories() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(storage.transactions.is_empty());
        assert_eq!(storage.categories.len(), DEFAULT_CATEGORIES.len());
    }
}
