//! Report period representation
//!
//! Supports monthly periods and full calendar years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// English month names, indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Represents a reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ReportPeriod {
    /// Single calendar month (e.g., "2024-01")
    Monthly { year: i32, month: u32 },

    /// Full calendar year (e.g., "2024")
    Annual { year: i32 },
}

impl ReportPeriod {
    /// Create a monthly period
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    /// Create an annual period
    pub fn annual(year: i32) -> Self {
        Self::Annual { year }
    }

    /// The monthly period covering today's date
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::monthly(today.year(), today.month())
    }

    /// Whether a date falls inside this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::Monthly { year, month } => date.year() == *year && date.month() == *month,
            Self::Annual { year } => date.year() == *year,
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2024-01"
    /// - Annual: "2024"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        let parts: Vec<&str> = s.split('-').collect();
        match parts.len() {
            1 => {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                Ok(Self::Annual { year })
            }
            2 => {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let month: u32 = parts[1]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

                if !(1..=12).contains(&month) {
                    return Err(PeriodParseError::InvalidMonth(month));
                }

                Ok(Self::Monthly { year, month })
            }
            _ => Err(PeriodParseError::InvalidFormat(s.to_string())),
        }
    }

    /// Human-readable label: "January 2024" or "Annual 2024"
    pub fn label(&self) -> String {
        match self {
            Self::Monthly { year, month } => format!("{} {}", month_name(*month), year),
            Self::Annual { year } => format!("Annual {}", year),
        }
    }

    /// Label suitable for file names: "January_2024" or "Annual_2024"
    pub fn file_label(&self) -> String {
        match self {
            Self::Monthly { year, month } => format!("{}_{}", month_name(*month), year),
            Self::Annual { year } => format!("Annual_{}", year),
        }
    }
}

fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Annual { year } => write!(f, "{:04}", year),
        }
    }
}

/// Error produced when a period string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    /// Not shaped like YYYY-MM or YYYY
    InvalidFormat(String),
    /// Well shaped, but the month lies outside 1-12
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
