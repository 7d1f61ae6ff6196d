//! Category service
//!
//! Business logic for managing the list of category names offered when
//! recording transactions. Categories are plain labels: removing one does
//! not touch transactions that already carry it.

use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// List all category names in their stored order
    pub fn list(&self) -> &[String] {
        self.storage.categories.all()
    }

    /// Add a new category name and persist the list
    pub fn add(&mut self, name: &str) -> TrackerResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        self.storage.categories.add(name.to_string())?;
        self.storage.categories.save()?;

        Ok(name.to_string())
    }

    /// Remove a category name and persist the list
    pub fn remove(&mut self, name: &str) -> TrackerResult<()> {
        let name = name.trim();
        if !self.storage.categories.remove(name) {
            return Err(TrackerError::category_not_found(name));
        }
        self.storage.categories.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::storage::DEFAULT_CATEGORIES;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_list_starts_with_defaults() {
        let (_temp_dir, mut storage) = create_test_storage();
        let service = CategoryService::new(&mut storage);

        assert_eq!(service.list().len(), DEFAULT_CATEGORIES.len());
        assert_eq!(service.list()[0], "Food & Dining");
    }

    #[test]
    fn test_add_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = CategoryService::new(&mut storage);

        let added = service.add("  Travel  ").unwrap();

        assert_eq!(added, "Travel");
        assert!(service.list().contains(&"Travel".to_string()));
    }

    #[test]
    fn test_add_empty_name() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = CategoryService::new(&mut storage);

        let result = service.add("   ");
        assert!(matches!(result, Err(TrackerError::Validation(_))));
    }

    #[test]
    fn test_add_duplicate() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = CategoryService::new(&mut storage);

        let result = service.add("Salary");
        assert!(matches!(result, Err(TrackerError::Duplicate { .. })));
    }

    #[test]
    fn test_remove_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = CategoryService::new(&mut storage);

        service.remove("Shopping").unwrap();
        assert!(!service.list().contains(&"Shopping".to_string()));
    }

    #[test]
    fn test_remove_unknown_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = CategoryService::new(&mut storage);

        let result = service.remove("Yachting");
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }

    #[test]
    fn test_changes_persist() {
        let (_temp_dir, mut storage) = create_test_storage();
        let path = storage.paths().categories_file();

        let mut service = CategoryService::new(&mut storage);
        service.add("Travel").unwrap();
        service.remove("Other").unwrap();

        let mut reloaded = crate::storage::CategoryRepository::new(path);
        reloaded.load().unwrap();
        assert!(reloaded.contains("Travel"));
        assert!(!reloaded.contains("Other"));
    }
}
