//! Transaction service
//!
//! Business logic for recording, listing, and deleting transactions.
//! All mutations persist through [`Storage`] before returning.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, ReportPeriod, Transaction, TransactionKind};
use crate::reports::{sorted_for_display, transactions_in_period};
use crate::storage::Storage;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Short description, e.g. "Grocery run"
    pub title: String,
    /// Positive amount in the transaction's own direction
    pub amount: Money,
    /// Income or expense
    pub kind: TransactionKind,
    /// Optional free-form category label
    pub category: Option<String>,
    /// Date the transaction occurred
    pub date: NaiveDate,
}

/// Service for transaction operations
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction and persist it
    pub fn add(&mut self, input: NewTransaction) -> TrackerResult<Transaction> {
        let title = input.title.trim().to_string();
        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let transaction = Transaction::new(title, input.amount, input.kind, category, input.date);
        transaction
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.transactions.add(transaction.clone())?;
        self.storage.transactions.save()?;

        Ok(transaction)
    }

    /// Find a single transaction by full ID or unique prefix
    pub fn find(&self, identifier: &str) -> TrackerResult<&Transaction> {
        let matches: Vec<&Transaction> = self
            .storage
            .transactions
            .all()
            .iter()
            .filter(|t| t.id.matches(identifier))
            .collect();

        match matches.as_slice() {
            [] => Err(TrackerError::transaction_not_found(identifier)),
            [transaction] => Ok(transaction),
            _ => Err(TrackerError::Validation(format!(
                "ID '{}' matches {} transactions. Provide more characters.",
                identifier,
                matches.len()
            ))),
        }
    }

    /// Delete a transaction by full ID or unique prefix, returning the
    /// removed transaction
    pub fn delete(&mut self, identifier: &str) -> TrackerResult<Transaction> {
        let id = self.find(identifier)?.id;

        let removed = self
            .storage
            .transactions
            .remove(id)
            .ok_or_else(|| TrackerError::transaction_not_found(identifier))?;
        self.storage.transactions.save()?;

        Ok(removed)
    }

    /// Delete every transaction, returning how many were removed
    pub fn clear(&mut self) -> TrackerResult<usize> {
        let removed = self.storage.transactions.clear();
        self.storage.transactions.save()?;
        Ok(removed)
    }

    /// List transactions in display order (newest date first), optionally
    /// restricted to a period and capped at `limit` entries
    pub fn list(&self, period: Option<ReportPeriod>, limit: Option<usize>) -> Vec<Transaction> {
        let filtered = match period {
            Some(period) => transactions_in_period(self.storage.transactions.all(), period),
            None => self.storage.transactions.all().to_vec(),
        };

        let mut transactions = sorted_for_display(&filtered);
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        transactions
    }

    /// Number of stored transactions
    pub fn count(&self) -> usize {
        self.storage.transactions.len()
    }
}
