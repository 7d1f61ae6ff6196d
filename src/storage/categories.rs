//! Category repository for JSON storage
//!
//! Manages the list of category names in categories.json. A fresh data
//! directory starts with a seeded set of common categories.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_json_or_else, write_json_atomic};

/// Categories seeded into a fresh data directory
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Salary",
    "Investment",
    "Other",
];

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

/// Repository for category name persistence
pub struct CategoryRepository {
    path: PathBuf,
    names: Vec<String>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            names: Vec::new(),
        }
    }

    /// Load categories from disk
    ///
    /// A missing or unreadable file yields the seeded default list.
    pub fn load(&mut self) -> TrackerResult<()> {
        self.names = read_json_or_else(&self.path, default_categories)?;
        Ok(())
    }

    /// Save categories to disk as a top-level JSON array
    pub fn save(&self) -> TrackerResult<()> {
        write_json_atomic(&self.path, &self.names)
    }

    /// All category names in insertion order
    pub fn all(&self) -> &[String] {
        &self.names
    }

    /// Check for an exact (case-sensitive) name match
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a category name
    ///
    /// Fails if the exact name already exists.
    pub fn add(&mut self, name: String) -> TrackerResult<()> {
        if self.contains(&name) {
            return Err(TrackerError::Duplicate {
                entity_type: "Category",
                identifier: name,
            });
        }
        self.names.push(name);
        Ok(())
    }

    /// Remove a category name, returning whether it existed
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() < before
    }

    /// Count categories
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
