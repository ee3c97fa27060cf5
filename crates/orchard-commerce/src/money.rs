//! Money type for representing monetary values.
//!
//! Prices are Vietnamese đồng, which has no minor unit in practice, so an
//! amount is a whole number of đồng. Arithmetic saturates instead of
//! overflowing: cart quantities are unbounded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency symbol appended to displayed amounts.
pub const VND_SYMBOL: &str = "\u{20ab}";

/// An amount of Vietnamese đồng.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    amount: i64,
}

impl Money {
    /// Create a Money value from whole đồng.
    pub const fn vnd(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero đồng.
    pub const fn zero() -> Self {
        Self::vnd(0)
    }

    /// The raw amount in đồng.
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(self, quantity: i64) -> Money {
        Money::vnd(self.amount.saturating_mul(quantity))
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money::vnd(self.amount.saturating_add(other.amount))
    }

    /// Format the way a vi-VN browser renders it (e.g., "450.000 ₫").
    ///
    /// ```
    /// use orchard_commerce::money::Money;
    /// assert_eq!(Money::vnd(1_010_000).display(), "1.010.000 \u{20ab}");
    /// ```
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), VND_SYMBOL)
    }

    /// Format without the symbol (e.g., "450.000").
    pub fn display_amount(&self) -> String {
        let grouped = group_thousands(self.amount.unsigned_abs());
        if self.amount < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

/// Insert `.` between groups of three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::vnd(450_000).display(), "450.000 \u{20ab}");
        assert_eq!(Money::vnd(280_000).display(), "280.000 \u{20ab}");
        assert_eq!(Money::vnd(1_010_000).display(), "1.010.000 \u{20ab}");
    }

    #[test]
    fn test_money_display_small_amounts() {
        assert_eq!(Money::vnd(0).display(), "0 \u{20ab}");
        assert_eq!(Money::vnd(999).display_amount(), "999");
        assert_eq!(Money::vnd(1000).display_amount(), "1.000");
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::vnd(-12_500).display_amount(), "-12.500");
        assert_eq!(
            Money::vnd(i64::MIN).display_amount(),
            "-9.223.372.036.854.775.808"
        );
    }

    #[test]
    fn test_money_addition() {
        let total = Money::vnd(450_000) + Money::vnd(560_000);
        assert_eq!(total.amount(), 1_010_000);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::vnd(280_000) * 2).amount(), 560_000);
        assert!(Money::vnd(0).times(10_000).is_zero());
    }

    #[test]
    fn test_money_saturates() {
        let huge = Money::vnd(680_000).times(i64::MAX);
        assert_eq!(huge.amount(), i64::MAX);
        assert_eq!((huge + Money::vnd(1)).amount(), i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::vnd(1), Money::vnd(2), Money::vnd(3)];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::vnd(6));
    }

    #[test]
    fn test_money_sum_saturates() {
        let total: Money = [Money::vnd(i64::MAX), Money::vnd(450_000)].into_iter().sum();
        assert_eq!(total.amount(), i64::MAX);
    }
}
