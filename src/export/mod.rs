//! Export module for Money Tracker
//!
//! Renders period reports as CSV files in the Money Tracker report layout.

pub mod csv;

pub use csv::PeriodCsvReport;
