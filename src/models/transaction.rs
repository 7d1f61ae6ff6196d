//! Transaction model
//!
//! Represents a single income or expense entry with an optional free-form
//! category label.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
}

impl TransactionKind {
    /// Lowercase name as stored on disk and in CSV exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Must round-trip through clap's ValueEnum parser, so stay lowercase
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable id assigned at creation
    pub id: TransactionId,

    /// Short description of the transaction
    pub title: String,

    /// Amount (always positive; the kind determines the sign)
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Free-form category label (optional)
    #[serde(default)]
    pub category: Option<String>,

    /// Transaction date
    pub date: NaiveDate,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        category: Option<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            amount,
            kind,
            category,
            date,
            created_at: Utc::now(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The category label, if one is set and non-blank after trimming
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Amount with its sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NonPositiveAmount { amount: Money },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Transaction title cannot be empty"),
            Self::NonPositiveAmount { amount } => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
