//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, user-input parsing and the
//! grouped formatting the dashboard displays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cravox::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
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

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, or `None` if the sum leaves the `i64` cent range
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Amount in whole currency units as a float, for ratios and charts
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Build an amount from a float in currency units, rounding to the cent
    pub fn from_major(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate the fraction to 2 digits
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Parse an amount typed into an entry form
    ///
    /// Same formats as [`Money::parse`], but negative amounts are rejected.
    pub fn parse_non_negative(s: &str) -> Result<Self, MoneyParseError> {
        let amount = Self::parse(s)?;
        if amount.is_negative() {
            return Err(MoneyParseError::Negative(s.trim().to_string()));
        }
        Ok(amount)
    }

    /// Format with thousands separators and no currency symbol
    ///
    /// Whole amounts drop the fraction, other amounts keep up to two
    /// fraction digits with trailing zeros removed: `1,800`, `-500`,
    /// `5,004.5`, `4.05`.
    pub fn format_grouped(&self) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&group_thousands(self.dollars().unsigned_abs()));

        let cents = self.cents_part();
        if cents != 0 {
            let fraction = format!("{:02}", cents);
            out.push('.');
            out.push_str(fraction.trim_end_matches('0'));
        }
        out
    }

    /// Format with thousands separators and a currency symbol: `$1,800`, `-$500`
    pub fn format_currency(&self, symbol: &str) -> String {
        let grouped = self.abs().format_grouped();
        if self.is_negative() {
            format!("-{}{}", symbol, grouped)
        } else {
            format!("{}{}", symbol, grouped)
        }
    }

    /// Format with a currency symbol and exactly two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
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
    Negative(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Negative(s) => write!(f, "Amount must not be negative: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 4.50 ").unwrap().cents(), 450);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("4.5x").is_err());
        assert!(Money::parse("4.509x").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(Money::parse_non_negative("4.50").unwrap().cents(), 450);
        assert_eq!(Money::parse_non_negative("0").unwrap(), Money::zero());
        assert!(matches!(
            Money::parse_non_negative("-1"),
            Err(MoneyParseError::Negative(_))
        ));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_dollars_cents(1800, 0).format_grouped(), "1,800");
        assert_eq!(Money::from_dollars_cents(-500, 0).format_grouped(), "-500");
        assert_eq!(Money::from_dollars_cents(5004, 50).format_grouped(), "5,004.5");
        assert_eq!(Money::from_cents(405).format_grouped(), "4.05");
        assert_eq!(Money::from_dollars_cents(1_234_567, 0).format_grouped(), "1,234,567");
        assert_eq!(Money::zero().format_grouped(), "0");
        assert_eq!(Money::from_cents(-50).format_grouped(), "-0.5");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(Money::from_dollars_cents(1800, 0).format_currency("$"), "$1,800");
        assert_eq!(Money::from_dollars_cents(-500, 0).format_currency("$"), "-$500");
    }

    #[test]
    fn test_major_conversions() {
        assert_eq!(Money::from_cents(450).as_major(), 4.5);
        assert_eq!(Money::from_major(12.34), Money::from_cents(1234));
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::from_cents(100), Money::from_cents(200)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 300);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_checked_add() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
    }
}
