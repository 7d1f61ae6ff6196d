//! Money type for currency amounts
//!
//! Amounts are whole cents in an i64, so sums and balances stay exact where
//! floating point would drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in cents (hundredths of the currency unit)
///
/// Serializes as the bare cent count, which keeps stored transaction files
/// free of floating-point amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Wrap a raw cent count
    ///
    /// # Examples
    /// ```
    /// use money_tracker::models::Money;
    /// let price = Money::from_cents(450); // $4.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw cent count, sign included
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part in cents, always 0-99
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Magnitude with the sign dropped
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10". More than two
    /// fraction digits is an error, not a silent truncation.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError(trimmed.to_string());

        // The sign comes before any currency symbol: "-$10.50"
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let cents = match rest.split_once('.') {
            None => {
                let dollars: i64 = rest.parse().map_err(|_| invalid())?;
                dollars.checked_mul(100).ok_or_else(invalid)?
            }
            Some((dollars, fraction)) => {
                let dollars: i64 = dollars.parse().map_err(|_| invalid())?;
                let fraction_cents = match fraction.len() {
                    0 => 0,
                    1 => 10 * fraction.parse::<i64>().map_err(|_| invalid())?,
                    2 => fraction.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                };
                dollars
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction_cents))
                    .ok_or_else(invalid)?
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as a plain decimal string with two fractional digits
    ///
    /// Used for CSV values where no currency symbol is wanted: "10.50", "-0.05"
    pub fn to_dollars_string(&self) -> String {
        let magnitude = self.0.abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }

    /// Format with a currency symbol, sign first: "-€10.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.abs().to_dollars_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

/// Error returned when a string cannot be read as a money amount
///
/// Carries the offending input for the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyParseError(String);

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid money format: {}", self.0)
    }
}

impl std::error::Error for MoneyParseError {}
