//! Prices
//!
//! Monetary amounts are integer minor units (pence/cents). Fractional
//! factors (multipliers, percentages) are [`Decimal`] values; scaling a
//! [`Money`] by a factor computes in `Decimal` and rounds once to minor
//! units with [`RoundingStrategy::MidpointAwayFromZero`].

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during price computation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    /// A monetary amount left the representable range of minor units.
    #[error("monetary amount overflowed the representable range")]
    AmountOverflow,
}

/// Represents an amount of money in minor units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the sum is unrepresentable.
    pub fn checked_add(self, other: Money) -> Result<Money, PricingError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(PricingError::AmountOverflow)
    }

    /// Subtracts an amount from this one.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the difference is
    /// unrepresentable.
    pub fn checked_sub(self, other: Money) -> Result<Money, PricingError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(PricingError::AmountOverflow)
    }

    /// Multiplies the amount by an integer factor.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the product is
    /// unrepresentable.
    pub fn checked_mul(self, factor: i64) -> Result<Money, PricingError> {
        self.0
            .checked_mul(factor)
            .map(Money)
            .ok_or(PricingError::AmountOverflow)
    }

    /// Scales the amount by a decimal factor, rounding midpoints away from
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the scaled value cannot be
    /// represented in minor units.
    pub fn scale(self, factor: Decimal) -> Result<Money, PricingError> {
        let scaled = Decimal::from(self.0)
            .checked_mul(factor)
            .ok_or(PricingError::AmountOverflow)?;

        Money::from_decimal_minor(scaled)
    }

    /// Rounds a decimal minor-unit value to an amount, midpoints away from
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the rounded value does not
    /// fit in an `i64`.
    pub fn from_decimal_minor(minor: Decimal) -> Result<Money, PricingError> {
        minor
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
            .ok_or(PricingError::AmountOverflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn minor_round_trips() {
        assert_eq!(Money::from_minor(1250).minor(), 1250);
        assert_eq!(Money::ZERO.minor(), 0);
    }

    #[test]
    fn checked_add_and_sub() -> TestResult {
        let total = Money::from_minor(100).checked_add(Money::from_minor(50))?;

        assert_eq!(total, Money::from_minor(150));
        assert_eq!(
            total.checked_sub(Money::from_minor(150))?,
            Money::from_minor(0)
        );

        Ok(())
    }

    #[test]
    fn checked_add_overflow_returns_error() {
        let result = Money::from_minor(i64::MAX).checked_add(Money::from_minor(1));

        assert!(matches!(result, Err(PricingError::AmountOverflow)));
    }

    #[test]
    fn checked_mul_overflow_returns_error() {
        let result = Money::from_minor(i64::MAX).checked_mul(2);

        assert!(matches!(result, Err(PricingError::AmountOverflow)));
    }

    #[test]
    fn scale_rounds_midpoint_away_from_zero() -> TestResult {
        // 5 * 0.5 = 2.5 rounds to 3, not 2.
        assert_eq!(
            Money::from_minor(5).scale(Decimal::new(5, 1))?,
            Money::from_minor(3)
        );

        // -5 * 0.5 = -2.5 rounds to -3.
        assert_eq!(
            Money::from_minor(-5).scale(Decimal::new(5, 1))?,
            Money::from_minor(-3)
        );

        Ok(())
    }

    #[test]
    fn scale_overflow_returns_error() {
        let result = Money::from_minor(i64::MAX).scale(Decimal::from(i64::MAX));

        assert!(matches!(result, Err(PricingError::AmountOverflow)));
    }

    #[test]
    fn display_formats_minor_units() {
        assert_eq!(Money::from_minor(12345).to_string(), "123.45");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-250).to_string(), "-2.50");
    }
}
