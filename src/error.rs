//! Custom error types for Money Tracker
//!
//! One thiserror enum covers the whole crate; the binary wraps it in anyhow
//! at the top level.

use thiserror::Error;

/// The main error type for Money Tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Rejected user input (bad amount, empty title, malformed period)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup by id or name found nothing
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An entity with the same id or name already exists
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A report export was requested for a period with no transactions
    #[error("No transactions to export for {period}")]
    NothingToExport { period: String },

    /// CSV file could not be read or its layout is wrong
    #[error("Import error: {0}")]
    Import(String),

    /// Report file could not be written
    #[error("Export error: {0}")]
    Export(String),

    /// Settings file problems or an unresolvable data directory
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data file persistence failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Other file I/O failures
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization failures outside the storage layer
    #[error("JSON error: {0}")]
    Json(String),
}

impl TrackerError {
    fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Failed lookup of a transaction by id or prefix
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Transaction", identifier)
    }

    /// Failed lookup of a category by name
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Category", identifier)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Money Tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
