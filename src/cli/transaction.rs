//! Transaction CLI commands

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, TransactionKind};
use crate::services::{ImportService, NewTransaction, TransactionService};
use crate::storage::Storage;

use super::parse_period_arg;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description, e.g. "Grocery run"
        title: String,
        /// Amount (e.g., "52.30" or "$52.30")
        amount: String,
        /// Transaction type
        #[arg(short = 't', long = "type", value_enum, default_value_t)]
        kind: TransactionKind,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Restrict to a period (YYYY-MM or YYYY)
        #[arg(short, long)]
        period: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete ALL transactions
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Import transactions from an exported CSV report
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            kind,
            category,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TrackerError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '52.30'. Error: {}",
                    amount, e
                ))
            })?;

            let date = parse_date_or_today(date.as_deref())?;

            let mut service = TransactionService::new(storage);
            let transaction = service.add(NewTransaction {
                title,
                amount,
                kind,
                category,
                date,
            })?;

            println!("Recorded transaction:");
            println!("  ID:       {}", transaction.id);
            println!("  Date:     {}", transaction.date);
            println!("  Title:    {}", transaction.title);
            println!("  Type:     {}", transaction.kind);
            if let Some(name) = transaction.category_name() {
                println!("  Category: {}", name);
            }
            println!("  Amount:   {}", transaction.amount);
        }

        TransactionCommands::List { period, limit } => {
            let period = period.as_deref().map(parse_period_arg).transpose()?;

            let service = TransactionService::new(storage);
            let transactions = service.list(period, Some(limit));

            print!("{}", format_transaction_register(&transactions));
            if !transactions.is_empty() {
                println!("\nShowing {} transaction(s)", transactions.len());
            }
        }

        TransactionCommands::Show { id } => {
            let service = TransactionService::new(storage);
            let transaction = service.find(&id)?;
            print!("{}", format_transaction_details(transaction));
        }

        TransactionCommands::Delete { id, force } => {
            let mut service = TransactionService::new(storage);

            if !force {
                let transaction = service.find(&id)?;
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(transaction));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id, deleted.date, deleted.title
            );
        }

        TransactionCommands::Clear { force } => {
            let mut service = TransactionService::new(storage);
            let count = service.count();

            if count == 0 {
                println!("No transactions to delete.");
                return Ok(());
            }

            if !force {
                println!("About to delete ALL {} transaction(s).", count);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = service.clear()?;
            println!("Deleted {} transaction(s).", removed);
        }

        TransactionCommands::Import { file } => {
            let mut service = ImportService::new(storage);
            let result = service.import_file(&file)?;

            println!(
                "Imported {} transaction(s) from '{}'",
                result.imported,
                file.display()
            );

            if !result.errors.is_empty() {
                println!();
                println!("{} row(s) could not be imported:", result.errors.len());
                for (row, message) in &result.errors {
                    println!("  Row {}: {}", row, message);
                }
            }
        }
    }

    Ok(())
}

fn parse_date_or_today(date: Option<&str>) -> TrackerResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
