//! Daily activity report
//!
//! Sums income and expenses per calendar day within a period, oldest day
//! first.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Money, ReportPeriod, Transaction};
use crate::storage::Storage;

use super::filter::transactions_in_period;

/// Income and expense totals for a single day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

impl DayActivity {
    /// Income minus expense for the day
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Day-by-day totals for a reporting period
#[derive(Debug, Clone)]
pub struct ActivityReport {
    /// The period the report covers
    pub period: ReportPeriod,
    /// Days with at least one transaction, oldest first
    pub days: Vec<DayActivity>,
}

impl ActivityReport {
    /// Generate a daily activity report for a period
    pub fn generate(storage: &Storage, period: ReportPeriod) -> Self {
        let transactions = transactions_in_period(storage.transactions.all(), period);

        let mut by_day: BTreeMap<NaiveDate, (Money, Money)> = BTreeMap::new();
        for txn in &transactions {
            let entry = by_day
                .entry(txn.date)
                .or_insert((Money::zero(), Money::zero()));
            if txn.is_income() {
                entry.0 += txn.amount;
            } else {
                entry.1 += txn.amount;
            }
        }

        let days = by_day
            .into_iter()
            .map(|(date, (income, expense))| DayActivity {
                date,
                income,
                expense,
            })
            .collect();

        Self { period, days }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Daily Activity: {}\n", self.period.label()));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.days.is_empty() {
            output.push_str("No transactions in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>12}\n",
            "Date", "Income", "Expense", "Net"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for day in &self.days {
            output.push_str(&format!(
                "{:<12} {:>12} {:>12} {:>12}\n",
                day.date.to_string(),
                day.income.to_string(),
                day.expense.to_string(),
                day.net().to_string()
            ));
        }

        output
    }
}
