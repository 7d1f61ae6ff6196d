//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::format_transaction_register;
use crate::error::TrackerResult;
use crate::models::ReportPeriod;
use crate::reports::{
    sorted_for_display, transactions_in_period, ActivityReport, AnalysisReport, PeriodSummary,
};
use crate::storage::Storage;

use super::{parse_period_arg, print_years_hint};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income and expense overview with the period's transactions
    Summary {
        /// Period to report on (YYYY-MM or YYYY), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Expense breakdown by category
    Analysis {
        /// Period to report on (YYYY-MM or YYYY), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Daily income and expense activity
    Activity {
        /// Period to report on (YYYY-MM or YYYY), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    match cmd {
        ReportCommands::Summary { period } => {
            let period = resolve_period(period.as_deref())?;
            handle_summary_report(storage, settings, period)
        }
        ReportCommands::Analysis { period } => {
            let period = resolve_period(period.as_deref())?;
            handle_analysis_report(storage, period)
        }
        ReportCommands::Activity { period } => {
            let period = resolve_period(period.as_deref())?;
            handle_activity_report(storage, period)
        }
    }
}

/// Handle the period overview report
fn handle_summary_report(
    storage: &Storage,
    settings: &Settings,
    period: ReportPeriod,
) -> TrackerResult<()> {
    let in_period = transactions_in_period(storage.transactions.all(), period);

    if in_period.is_empty() {
        print_empty_period_hint(storage, period);
        return Ok(());
    }

    let summary = PeriodSummary::compute(&in_period);
    let symbol = settings.currency_symbol.as_str();

    println!("Overview: {}", period.label());
    println!("{}", "=".repeat(80));
    println!("Total Income:  {}", summary.income.format_with_symbol(symbol));
    println!("Total Expense: {}", summary.expense.format_with_symbol(symbol));
    println!("Net Balance:   {}", summary.balance.format_with_symbol(symbol));
    println!("Transactions:  {}", summary.transaction_count);
    println!();

    print!(
        "{}",
        format_transaction_register(&sorted_for_display(&in_period))
    );

    Ok(())
}

/// Handle the category analysis report
fn handle_analysis_report(storage: &Storage, period: ReportPeriod) -> TrackerResult<()> {
    let report = AnalysisReport::generate(storage, period);

    if report.summary.transaction_count == 0 {
        print_empty_period_hint(storage, period);
        return Ok(());
    }

    print!("{}", report.format_terminal());
    Ok(())
}

/// Handle the daily activity report
fn handle_activity_report(storage: &Storage, period: ReportPeriod) -> TrackerResult<()> {
    let report = ActivityReport::generate(storage, period);

    if report.days.is_empty() {
        print_empty_period_hint(storage, period);
        return Ok(());
    }

    print!("{}", report.format_terminal());
    Ok(())
}

/// Parse a period argument, defaulting to the current month
fn resolve_period(period: Option<&str>) -> TrackerResult<ReportPeriod> {
    match period {
        Some(s) => parse_period_arg(s),
        None => Ok(ReportPeriod::current_month()),
    }
}

/// Tell the user the period is empty and which years do have data
fn print_empty_period_hint(storage: &Storage, period: ReportPeriod) {
    println!("No transactions in {}.", period.label());
    print_years_hint(storage);
}
