//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit (paise for INR), so
//! totals never pick up floating-point drift. Display follows the `en-IN`
//! locale: rupee symbol, two decimals and Indian digit grouping
//! (`₹1,23,456.78`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::INR => 2,
        }
    }

    /// Locale used when rendering amounts.
    pub fn locale(&self) -> &'static str {
        match self {
            Currency::INR => "en-IN",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create an INR amount from paise.
    pub fn inr(amount_minor: i64) -> Self {
        Self::new(amount_minor, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Add, clamping at the bounds of `i64` instead of overflowing.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// Multiply by a quantity, clamping instead of overflowing.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_minor.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Sum an iterator of Money values, clamping instead of overflowing.
    pub fn saturating_sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc.saturating_add(m))
    }

    /// Format as a localized display string (e.g., "₹1,499.00").
    pub fn display(&self) -> String {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount())
    }

    /// Format the absolute amount without symbol or sign (e.g., "1,499.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_minor.unsigned_abs();
        let major = group_indian(&(abs / divisor).to_string());

        if places == 0 {
            return major;
        }
        format!(
            "{}.{:0width$}",
            major,
            abs % divisor,
            width = places as usize
        )
    }
}

/// Apply Indian digit grouping: the last three digits form one group, the
/// rest are grouped in pairs ("1234567" -> "12,34,567").
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
