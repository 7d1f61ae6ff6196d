//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Transactions
//! are kept in insertion order, which downstream reports rely on for stable
//! tie-breaking.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    items: Vec<Transaction>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: Vec::new(),
        }
    }

    /// Load transactions from disk
    ///
    /// A missing or unreadable file yields an empty collection.
    pub fn load(&mut self) -> TrackerResult<()> {
        self.items = read_json(&self.path)?;
        Ok(())
    }

    /// Save transactions to disk as a top-level JSON array
    pub fn save(&self) -> TrackerResult<()> {
        write_json_atomic(&self.path, &self.items)
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Append a transaction
    ///
    /// Fails if a transaction with the same ID already exists.
    pub fn add(&mut self, txn: Transaction) -> TrackerResult<()> {
        if self.get(txn.id).is_some() {
            return Err(TrackerError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }
        self.items.push(txn);
        Ok(())
    }

    /// Remove a transaction, returning it if it existed
    ///
    /// The relative order of the remaining transactions is unchanged.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(index))
    }

    /// Remove all transactions, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Count transactions
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the repository is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn temp_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_txn(title: &str, cents: i64) -> Transaction {
        Transaction::new(
            title,
            Money::from_cents(cents),
            TransactionKind::Expense,
            None,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        let txn = sample_txn("Groceries", 5000);
        let id = txn.id;

        repo.add(txn).unwrap();

        let retrieved = repo.get(id).unwrap();
        assert_eq!(retrieved.amount.cents(), 5000);
    }

    #[test]
    fn test_add_duplicate_id_fails() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        let txn = sample_txn("Groceries", 5000);
        let dup = txn.clone();

        repo.add(txn).unwrap();
        let result = repo.add(dup);
        assert!(matches!(result, Err(TrackerError::Duplicate { .. })));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        repo.add(sample_txn("First", 100)).unwrap();
        repo.add(sample_txn("Second", 200)).unwrap();
        repo.add(sample_txn("Third", 300)).unwrap();

        let titles: Vec<_> = repo.all().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        let txn = sample_txn("Groceries", 5000);
        let id = txn.id;

        repo.add(txn).unwrap();
        repo.save().unwrap();

        // Create new repo and load
        let path = temp_dir.path().join("transactions.json");
        let mut repo2 = TransactionRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.len(), 1);
        let retrieved = repo2.get(id).unwrap();
        assert_eq!(retrieved.amount.cents(), 5000);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (temp_dir, mut repo) = temp_repo();
        std::fs::write(temp_dir.path().join("transactions.json"), "{broken").unwrap();

        repo.load().unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        repo.add(sample_txn("First", 100)).unwrap();
        let middle = sample_txn("Second", 200);
        let middle_id = middle.id;
        repo.add(middle).unwrap();
        repo.add(sample_txn("Third", 300)).unwrap();

        let removed = repo.remove(middle_id).unwrap();
        assert_eq!(removed.title, "Second");

        let titles: Vec<_> = repo.all().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Third"]);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        assert!(repo.remove(TransactionId::new()).is_none());
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, mut repo) = temp_repo();
        repo.load().unwrap();

        repo.add(sample_txn("First", 100)).unwrap();
        repo.add(sample_txn("Second", 200)).unwrap();

        assert_eq!(repo.clear(), 2);
        assert!(repo.is_empty());
    }
}
