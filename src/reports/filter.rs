//! Transaction filtering and ordering helpers
//!
//! All helpers return new vectors and leave the stored collection order
//! untouched.

use chrono::Datelike;

use crate::models::{ReportPeriod, Transaction};

/// Transactions whose date falls inside the period, in collection order
pub fn transactions_in_period(
    transactions: &[Transaction],
    period: ReportPeriod,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect()
}

/// Transactions ordered newest-first for display
///
/// The sort is stable, so transactions sharing a date keep their collection
/// order relative to each other.
pub fn sorted_for_display(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Distinct years with at least one transaction, newest first
pub fn available_years(transactions: &[Transaction]) -> Vec<i32> {
    let mut years: Vec<i32> = transactions.iter().map(|t| t.date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
