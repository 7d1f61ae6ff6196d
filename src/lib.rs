//! Money Tracker - command-line personal finance tracker
//!
//! Records income and expense transactions in plain JSON files and
//! answers questions about them: monthly and annual summaries, expense
//! breakdowns by category, daily activity, and CSV report export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, periods)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Period summaries and breakdowns
//! - `export`: CSV report rendering
//! - `display`: Terminal formatting
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
