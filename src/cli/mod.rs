//! CLI command handlers
//!
//! Bridges clap argument parsing with the service and report layers.

pub mod category;
pub mod config;
pub mod export;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{TrackerError, TrackerResult};
use crate::models::ReportPeriod;
use crate::reports::available_years;
use crate::storage::Storage;

/// Parse a user-supplied period argument
pub(crate) fn parse_period_arg(s: &str) -> TrackerResult<ReportPeriod> {
    ReportPeriod::parse(s).map_err(|e| {
        TrackerError::Validation(format!("{}. Use YYYY-MM (e.g., 2024-01) or YYYY.", e))
    })
}

/// Print the years that have transactions, newest first
pub(crate) fn print_years_hint(storage: &Storage) {
    let years = available_years(storage.transactions.all());
    if !years.is_empty() {
        let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        println!("Years with data: {}", years.join(", "));
    }
}
