//! Export CLI command

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::export::PeriodCsvReport;
use crate::models::ReportPeriod;
use crate::storage::Storage;

use super::{parse_period_arg, print_years_hint};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Period to export (YYYY-MM or YYYY), defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,

    /// Output file path, defaults to a generated name in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> TrackerResult<()> {
    let period = match args.period.as_deref() {
        Some(s) => parse_period_arg(s)?,
        None => ReportPeriod::current_month(),
    };

    // An empty period is not an error worth a non-zero exit; point the
    // user at the periods that do have data instead.
    let report = match PeriodCsvReport::generate(storage, period) {
        Ok(report) => report,
        Err(TrackerError::NothingToExport { period }) => {
            println!("No transactions to export for {}.", period);
            print_years_hint(storage);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(report.file_name()));

    fs::write(&path, report.render()).map_err(|e| {
        TrackerError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    println!(
        "Exported {} transaction(s) to: {}",
        report.transaction_count(),
        path.display()
    );

    Ok(())
}
