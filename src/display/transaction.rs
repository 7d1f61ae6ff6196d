//! Transaction display formatting
//!
//! Formats transactions for terminal output as register rows and
//! detail views.

use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(transaction: &Transaction) -> String {
    let category = transaction.category_name().unwrap_or("(uncategorized)");

    format!(
        "{:13} {} {:25} {:18} {:>12}",
        transaction.id.to_string(),
        transaction.date.format("%Y-%m-%d"),
        truncate(&transaction.title, 25),
        truncate(category, 18),
        transaction.signed_amount().to_string()
    )
}

/// Format transactions as a columnar register under a header row
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:13} {:10} {:25} {:18} {:>12}\n",
        "ID", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for transaction in transactions {
        output.push_str(&format_transaction_row(transaction));
        output.push('\n');
    }

    output
}

/// Format full transaction details
pub fn format_transaction_details(transaction: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", transaction.id));
    output.push_str(&format!(
        "Date:        {}\n",
        transaction.date.format("%Y-%m-%d")
    ));
    output.push_str(&format!("Title:       {}\n", transaction.title));
    output.push_str(&format!("Type:        {}\n", transaction.kind));

    match transaction.category_name() {
        Some(name) => output.push_str(&format!("Category:    {}\n", name)),
        None => output.push_str("Category:    (uncategorized)\n"),
    }

    output.push_str(&format!("Amount:      {}\n", transaction.amount));

    output
}

/// Truncate a string to a maximum display width, padding shorter strings
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn sample_expense() -> Transaction {
        Transaction::new(
            "Groceries".to_string(),
            Money::from_cents(5_230),
            TransactionKind::Expense,
            Some("Food & Dining".to_string()),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&sample_expense());

        assert!(formatted.contains("2024-01-10"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("Food & Dining"));
        assert!(formatted.contains("-$52.30"));
    }

    #[test]
    fn test_format_row_uncategorized() {
        let mut transaction = sample_expense();
        transaction.category = None;

        let formatted = format_transaction_row(&transaction);
        assert!(formatted.contains("(uncategorized)"));
    }

    #[test]
    fn test_empty_register_prints_placeholder() {
        let formatted = format_transaction_register(&[]);
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_register_has_header() {
        let formatted = format_transaction_register(&[sample_expense()]);

        assert!(formatted.contains("ID"));
        assert!(formatted.contains("Title"));
        assert!(formatted.contains("Amount"));
    }

    #[test]
    fn test_details_show_every_field() {
        let formatted = format_transaction_details(&sample_expense());

        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("expense"));
        assert!(formatted.contains("Food & Dining"));
        assert!(formatted.contains("$52.30"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long string", 10);
        assert!(result.chars().count() <= 10);
        assert!(result.ends_with("..."));
    }
}
