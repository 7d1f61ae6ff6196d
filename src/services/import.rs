//! CSV import service
//!
//! Reads transactions back from a previously exported report file. The
//! expected layout is the one [`crate::export::PeriodCsvReport`] writes: a
//! `Date,Title,Type,Category,Amount` header, one quoted record per
//! transaction, and a trailing summary block that import ignores.

use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Column headers an import file must carry, in order
const EXPECTED_HEADERS: [&str; 5] = ["Date", "Title", "Type", "Category", "Amount"];

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Number of transactions imported
    pub imported: usize,
    /// Rows that failed to parse, as (data row number, message) pairs
    /// in file order. Row numbers start at 1 for the first row after
    /// the header.
    pub errors: Vec<(usize, String)>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Import transactions from a CSV file on disk
    pub fn import_file(&mut self, path: &Path) -> TrackerResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                TrackerError::Import(format!("Could not open '{}': {}", path.display(), e))
            })?;
        self.import_from_csv_reader(&mut reader)
    }

    /// Import transactions from an already-open CSV reader
    ///
    /// Rows that fail to parse are collected rather than aborting the
    /// whole import. Successfully parsed rows are only persisted once,
    /// after the file has been read to the end.
    pub fn import_from_csv_reader<R: std::io::Read>(
        &mut self,
        reader: &mut Reader<R>,
    ) -> TrackerResult<ImportResult> {
        let headers = reader
            .headers()
            .map_err(|e| TrackerError::Import(format!("Could not read header row: {}", e)))?;
        let found: Vec<&str> = headers.iter().map(str::trim).collect();
        if found != EXPECTED_HEADERS {
            return Err(TrackerError::Import(format!(
                "Unexpected header row '{}'. Expected '{}'.",
                found.join(","),
                EXPECTED_HEADERS.join(",")
            )));
        }

        let mut parsed = Vec::new();
        let mut errors = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let row = idx + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    errors.push((row, format!("Could not read record: {}", e)));
                    continue;
                }
            };

            // The summary block at the bottom of an exported file starts
            // with a lone "Summary" cell. Everything after it is totals,
            // not transactions.
            if record.len() == 1 && record.get(0).map(str::trim) == Some("Summary") {
                break;
            }

            match self.parse_record(&record) {
                Ok(transaction) => parsed.push(transaction),
                Err(e) => errors.push((row, e)),
            }
        }

        let imported = parsed.len();
        for transaction in parsed {
            self.storage.transactions.add(transaction)?;
        }
        self.storage.transactions.save()?;

        Ok(ImportResult { imported, errors })
    }

    /// Parse a single data record into a transaction
    fn parse_record(&self, record: &StringRecord) -> Result<Transaction, String> {
        let date_str = field(record, 0, "date")?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| format!("Could not parse date '{}'", date_str))?;

        let title = field(record, 1, "title")?;
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        let kind_str = field(record, 2, "type")?;
        let kind = match kind_str.to_lowercase().as_str() {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            other => return Err(format!("Unknown transaction type '{}'", other)),
        };

        // Export writes "N/A" for uncategorized transactions
        let category = match field(record, 3, "category")? {
            "" | "N/A" => None,
            name => Some(name.to_string()),
        };

        let amount_str = field(record, 4, "amount")?;
        let amount = Money::parse(amount_str)
            .map_err(|e| format!("Could not parse amount '{}': {}", amount_str, e))?;
        if !amount.is_positive() {
            return Err(format!("Amount must be positive, got '{}'", amount_str));
        }

        Ok(Transaction::new(title.to_string(), amount, kind, category, date))
    }
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str) -> Result<&'r str, String> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| format!("Missing {} column", name))
}
