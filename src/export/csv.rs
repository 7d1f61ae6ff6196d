//! CSV export functionality
//!
//! Renders a period's transactions in the Money Tracker report layout: an
//! unquoted header row, fully quoted data rows in collection order, and a
//! trailing summary block with income, expense and balance totals.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ReportPeriod, Transaction};
use crate::reports::{transactions_in_period, PeriodSummary};
use crate::storage::Storage;

/// CSV report for a reporting period
#[derive(Debug, Clone)]
pub struct PeriodCsvReport {
    /// The period the report covers
    pub period: ReportPeriod,
    /// Transactions in the period, in collection order
    pub transactions: Vec<Transaction>,
    /// Totals over the included transactions
    pub summary: PeriodSummary,
}

impl PeriodCsvReport {
    /// Generate a CSV report for a period
    ///
    /// Fails with [`TrackerError::NothingToExport`] when the period contains
    /// no transactions, so callers never write an empty report file.
    pub fn generate(storage: &Storage, period: ReportPeriod) -> TrackerResult<Self> {
        let transactions = transactions_in_period(storage.transactions.all(), period);
        if transactions.is_empty() {
            return Err(TrackerError::NothingToExport {
                period: period.label(),
            });
        }

        let summary = PeriodSummary::compute(&transactions);
        Ok(Self {
            period,
            transactions,
            summary,
        })
    }

    /// Number of transaction rows in the report
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Suggested file name, e.g. "Money_Tracker_Report_January_2024.csv"
    pub fn file_name(&self) -> String {
        format!("Money_Tracker_Report_{}.csv", self.period.file_label())
    }

    /// Render the report to a CSV string
    ///
    /// The output has no trailing newline. Data cells are always quoted;
    /// the header and summary lines are not.
    pub fn render(&self) -> String {
        let mut lines = vec!["Date,Title,Type,Category,Amount".to_string()];

        for txn in &self.transactions {
            let cells = [
                txn.date.to_string(),
                txn.title.clone(),
                txn.kind.as_str().to_string(),
                txn.category_name().unwrap_or("N/A").to_string(),
                txn.amount.to_dollars_string(),
            ];
            let row = cells
                .iter()
                .map(|cell| csv_field(cell))
                .collect::<Vec<_>>()
                .join(",");
            lines.push(row);
        }

        let mut csv = lines.join("\n");
        csv.push_str(&format!(
            "\n\nSummary\nTotal Income,{}\nTotal Expense,{}\nNet Balance,{}",
            self.summary.income.to_dollars_string(),
            self.summary.expense.to_dollars_string(),
            self.summary.balance.to_dollars_string()
        ));
        csv
    }
}

/// Quote a CSV value, doubling any embedded quotes
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
