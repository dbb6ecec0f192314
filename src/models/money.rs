//! Money type for representing ledger amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides arithmetic operations and the plain two-decimal formatting
//! used by category reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

/// Represents a monetary amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_ledger::models::Money;
    /// let amount = Money::from_cents(4567); // 45.67
    /// assert_eq!(amount.to_string(), "45.67");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a Money amount from a decimal value, rounding to the nearest cent
    ///
    /// Returns `None` for non-finite values and values outside the cent range.
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that reports overflow instead of wrapping
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Negation that reports overflow (only `i64::MIN` cents has no negation)
    pub const fn checked_neg(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10.5", "10". Digits past the
    /// second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if !body.bytes().any(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = match body.split_once('.') {
            Some((units_str, cents_str)) => {
                let units: i64 = if units_str.is_empty() {
                    0
                } else {
                    parse_digits(units_str, s)?
                };

                let cents: i64 = match cents_str.len() {
                    0 => 0,
                    1 => parse_digits(cents_str, s)? * 10,
                    _ => {
                        // Validate the whole fraction before truncating it
                        parse_digits(cents_str, s)?;
                        parse_digits(&cents_str[..2], s)?
                    }
                };

                units
                    .checked_mul(100)
                    .and_then(|v| v.checked_add(cents))
                    .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
            }
            None => parse_digits(body, s)?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format without trailing zero cents for whole amounts
    ///
    /// Used by the `Total:` line of a category report, so an empty ledger
    /// reads `Total: 0` while `854.33` keeps its cents.
    pub fn to_compact_string(&self) -> String {
        if self.cents_part() == 0 {
            self.units().to_string()
        } else {
            self.to_string()
        }
    }
}

fn parse_digits(digits: &str, original: &str) -> Result<i64, MoneyParseError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidFormat(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| MoneyParseError::OutOfRange(original.to_string()))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
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
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
