//! Reports module for Money Tracker
//!
//! Provides period filtering, income/expense summaries, category analysis,
//! and daily activity reports.

pub mod activity;
pub mod filter;
pub mod summary;

pub use activity::{ActivityReport, DayActivity};
pub use filter::{available_years, sorted_for_display, transactions_in_period};
pub use summary::{category_breakdown, AnalysisReport, CategoryShare, PeriodSummary};
