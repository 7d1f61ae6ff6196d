//! Core data models for Money Tracker
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, monetary amounts, and reporting periods.

pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use period::ReportPeriod;
pub use transaction::{Transaction, TransactionKind};
