//! Period summary and expense analysis
//!
//! Aggregates transactions into income/expense totals and a per-category
//! expense breakdown.

use std::collections::HashMap;

use crate::models::{Money, ReportPeriod, Transaction};
use crate::storage::Storage;

use super::filter::transactions_in_period;

/// Income, expense and balance totals for a set of transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts (as a positive value)
    pub expense: Money,
    /// Income minus expense
    pub balance: Money,
    /// Number of transactions included
    pub transaction_count: usize,
}

impl PeriodSummary {
    /// Compute totals over a set of transactions
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
            transaction_count: transactions.len(),
        }
    }
}

/// A single category's share of total expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category label
    pub category: String,
    /// Total spent in this category
    pub amount: Money,
    /// Share of all expenses in the period, 0-100
    pub percentage: f64,
}

/// Expense totals per category, largest first
///
/// Only expense transactions with a non-blank category participate, but the
/// percentage denominator is the full expense total including uncategorized
/// spending. Categories with equal totals keep the order in which they first
/// appear. Returns an empty list when the period has no expenses at all.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let summary = PeriodSummary::compute(transactions);
    if !summary.expense.is_positive() {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        if let Some(name) = txn.category_name() {
            match index.get(name) {
                Some(&i) => shares[i].amount += txn.amount,
                None => {
                    index.insert(name.to_string(), shares.len());
                    shares.push(CategoryShare {
                        category: name.to_string(),
                        amount: txn.amount,
                        percentage: 0.0,
                    });
                }
            }
        }
    }

    for share in &mut shares {
        share.percentage =
            (share.amount.cents() as f64 / summary.expense.cents() as f64) * 100.0;
    }

    // Stable sort keeps first-appearance order for equal amounts
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Expense analysis for a reporting period
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The period the report covers
    pub period: ReportPeriod,
    /// Income/expense totals for the period
    pub summary: PeriodSummary,
    /// Per-category expense breakdown, largest first
    pub breakdown: Vec<CategoryShare>,
}

impl AnalysisReport {
    /// Generate an analysis report for a period
    pub fn generate(storage: &Storage, period: ReportPeriod) -> Self {
        let transactions = transactions_in_period(storage.transactions.all(), period);
        let summary = PeriodSummary::compute(&transactions);
        let breakdown = category_breakdown(&transactions);

        Self {
            period,
            summary,
            breakdown,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Expense Analysis: {}\n", self.period.label()));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Total Income:  {}\n", self.summary.income));
        output.push_str(&format!("Total Expense: {}\n", self.summary.expense));
        output.push_str(&format!("Net Balance:   {}\n", self.summary.balance));
        output.push_str(&format!(
            "Transactions:  {}\n\n",
            self.summary.transaction_count
        ));

        if self.breakdown.is_empty() {
            output.push_str("No categorized expenses in this period.\n");
            return output;
        }

        output.push_str(&format!("{:<35} {:>12} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for share in &self.breakdown {
            output.push_str(&format!(
                "{:<35} {:>12} {:>7.1}%\n",
                share.category,
                share.amount.to_string(),
                share.percentage
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn income(title: &str, cents: i64, on: NaiveDate) -> Transaction {
        Transaction::new(
            title,
            Money::from_cents(cents),
            TransactionKind::Income,
            None,
            on,
        )
    }

    fn expense(title: &str, cents: i64, category: Option<&str>, on: NaiveDate) -> Transaction {
        Transaction::new(
            title,
            Money::from_cents(cents),
            TransactionKind::Expense,
            category.map(str::to_string),
            on,
        )
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_compute_totals() {
        let transactions = vec![
            income("Paycheck", 100000, date(2024, 1, 5)),
            expense("Groceries", 20000, Some("Food"), date(2024, 1, 10)),
            expense("Snack", 5000, None, date(2024, 1, 12)),
        ];

        let summary = PeriodSummary::compute(&transactions);
        assert_eq!(summary.income, Money::from_cents(100000));
        assert_eq!(summary.expense, Money::from_cents(25000));
        assert_eq!(summary.balance, Money::from_cents(75000));
        assert_eq!(summary.transaction_count, 3);
    }

    #[test]
    fn test_compute_empty() {
        let summary = PeriodSummary::compute(&[]);
        assert!(summary.income.is_zero());
        assert!(summary.expense.is_zero());
        assert!(summary.balance.is_zero());
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn test_breakdown_sorted_largest_first() {
        let transactions = vec![
            expense("Bus", 3000, Some("Transport"), date(2024, 1, 2)),
            expense("Groceries", 20000, Some("Food"), date(2024, 1, 5)),
            expense("Dinner", 8000, Some("Food"), date(2024, 1, 9)),
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].amount, Money::from_cents(28000));
        assert_eq!(breakdown[1].category, "Transport");
        assert_eq!(breakdown[1].amount, Money::from_cents(3000));
    }

    #[test]
    fn test_breakdown_percentages_include_uncategorized_expense() {
        let transactions = vec![
            expense("Groceries", 7500, Some("Food"), date(2024, 1, 5)),
            expense("Mystery", 2500, None, date(2024, 1, 6)),
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 1);
        // 7500 of 10000 total expense
        assert!((breakdown[0].percentage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_ignores_income() {
        let transactions = vec![
            income("Paycheck", 100000, date(2024, 1, 5)),
            expense("Groceries", 20000, Some("Food"), date(2024, 1, 10)),
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Food");
        assert!((breakdown[0].percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_empty_without_expenses() {
        let transactions = vec![income("Paycheck", 100000, date(2024, 1, 5))];
        assert!(category_breakdown(&transactions).is_empty());
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_breakdown_blank_category_treated_as_uncategorized() {
        let transactions = vec![
            expense("Groceries", 5000, Some("  "), date(2024, 1, 5)),
            expense("Dinner", 5000, Some("Food"), date(2024, 1, 6)),
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Food");
    }

    #[test]
    fn test_breakdown_ties_keep_first_appearance_order() {
        let transactions = vec![
            expense("A", 5000, Some("Alpha"), date(2024, 1, 5)),
            expense("B", 5000, Some("Beta"), date(2024, 1, 6)),
            expense("C", 5000, Some("Gamma"), date(2024, 1, 7)),
        ];

        let breakdown = category_breakdown(&transactions);
        let names: Vec<_> = breakdown.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_breakdown_equals_expense_when_all_categorized() {
        let transactions = vec![
            expense("A", 4000, Some("Food"), date(2024, 1, 5)),
            expense("B", 6000, Some("Transport"), date(2024, 1, 6)),
        ];

        let summary = PeriodSummary::compute(&transactions);
        let breakdown = category_breakdown(&transactions);
        let breakdown_total: Money = breakdown.iter().map(|s| s.amount).sum();
        assert_eq!(breakdown_total, summary.expense);
    }

    #[test]
    fn test_generate_analysis_report() {
        let (_temp_dir, mut storage) = create_test_storage();

        storage
            .transactions
            .add(income("Paycheck", 100000, date(2024, 1, 5)))
            .unwrap();
        storage
            .transactions
            .add(expense("Groceries", 20000, Some("Food"), date(2024, 1, 10)))
            .unwrap();
        storage
            .transactions
            .add(expense("Snack", 5000, None, date(2024, 2, 1)))
            .unwrap();

        let report = AnalysisReport::generate(&storage, ReportPeriod::monthly(2024, 1));

        assert_eq!(report.summary.income, Money::from_cents(100000));
        assert_eq!(report.summary.expense, Money::from_cents(20000));
        assert_eq!(report.summary.balance, Money::from_cents(80000));
        assert_eq!(report.summary.transaction_count, 2);
        assert_eq!(report.breakdown.len(), 1);
        assert_eq!(report.breakdown[0].category, "Food");
        assert_eq!(report.breakdown[0].amount, Money::from_cents(20000));
    }

    #[test]
    fn test_format_terminal_without_expenses() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage
            .transactions
            .add(income("Paycheck", 100000, date(2024, 1, 5)))
            .unwrap();

        let report = AnalysisReport::generate(&storage, ReportPeriod::monthly(2024, 1));
        let output = report.format_terminal();
        assert!(output.contains("Expense Analysis: January 2024"));
        assert!(output.contains("No categorized expenses in this period."));
    }
}
