//! Document pricing
//!
//! The page/colour/duplex formula: a per-page base price multiplied by the
//! page count and quantity, then by the colour and duplex factors when those
//! options are selected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::prices::Money;

pub use crate::prices::PricingError;

/// Shop-wide document pricing configuration.
///
/// A single configuration applies to every document order; it is seeded once
/// and only changed by administrative action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price per page in minor units.
    pub base_price: Money,

    /// Factor applied when colour printing is selected, typically above 1.
    pub color_multiplier: Decimal,

    /// Factor applied when duplex printing is selected, typically below 1.
    pub duplex_multiplier: Decimal,

    /// ISO currency code, display metadata only.
    pub currency: String,
}

/// Itemised result of a document price calculation.
///
/// The multipliers are the effective factors used: `1` when the
/// corresponding option was not selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Price per page in minor units.
    pub base_price: Money,

    /// Number of pages priced.
    pub pages: u32,

    /// Number of copies priced.
    pub quantity: u32,

    /// Effective colour factor.
    pub color_multiplier: Decimal,

    /// Effective duplex factor.
    pub duplex_multiplier: Decimal,

    /// Price before promotions.
    pub subtotal: Money,

    /// Final price.
    pub total: Money,
}

/// Calculates the price of printing `pages` pages, `quantity` times.
///
/// The computation follows the formula stepwise: base price times pages
/// times quantity, then the colour factor, then the duplex factor. The
/// decimal result is rounded to minor units once at the end.
///
/// Zero pages or quantity yield a zero total; positivity is a boundary
/// validation concern for the caller.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the computation leaves the
/// representable range.
pub fn calculate_price(
    config: &PricingConfig,
    pages: u32,
    color: bool,
    duplex: bool,
    quantity: u32,
) -> Result<PriceBreakdown, PricingError> {
    let color_multiplier = if color {
        config.color_multiplier
    } else {
        Decimal::ONE
    };

    let duplex_multiplier = if duplex {
        config.duplex_multiplier
    } else {
        Decimal::ONE
    };

    let subtotal = Decimal::from(config.base_price.minor())
        .checked_mul(Decimal::from(pages))
        .and_then(|amount| amount.checked_mul(Decimal::from(quantity)))
        .and_then(|amount| amount.checked_mul(color_multiplier))
        .and_then(|amount| amount.checked_mul(duplex_multiplier))
        .ok_or(PricingError::AmountOverflow)?;

    let total = Money::from_decimal_minor(subtotal)?;

    Ok(PriceBreakdown {
        base_price: config.base_price,
        pages,
        quantity,
        color_multiplier,
        duplex_multiplier,
        subtotal: total,
        total,
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_config() -> PricingConfig {
        PricingConfig {
            base_price: Money::from_minor(10),
            color_multiplier: Decimal::new(15, 1),
            duplex_multiplier: Decimal::new(9, 1),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn colour_single_sided() -> TestResult {
        let breakdown = calculate_price(&test_config(), 5, true, false, 2)?;

        assert_eq!(breakdown.subtotal, Money::from_minor(150));
        assert_eq!(breakdown.total, Money::from_minor(150));

        Ok(())
    }

    #[test]
    fn colour_duplex() -> TestResult {
        let breakdown = calculate_price(&test_config(), 5, true, true, 2)?;

        assert_eq!(breakdown.total, Money::from_minor(135));

        Ok(())
    }

    #[test]
    fn plain_printing_uses_unit_factors() -> TestResult {
        let breakdown = calculate_price(&test_config(), 3, false, false, 1)?;

        assert_eq!(breakdown.color_multiplier, Decimal::ONE);
        assert_eq!(breakdown.duplex_multiplier, Decimal::ONE);
        assert_eq!(breakdown.total, Money::from_minor(30));

        Ok(())
    }

    #[test]
    fn breakdown_echoes_inputs() -> TestResult {
        let config = test_config();
        let breakdown = calculate_price(&config, 5, true, false, 2)?;

        assert_eq!(breakdown.base_price, config.base_price);
        assert_eq!(breakdown.pages, 5);
        assert_eq!(breakdown.quantity, 2);
        assert_eq!(breakdown.color_multiplier, config.color_multiplier);

        Ok(())
    }

    #[test]
    fn monotonic_in_pages_and_quantity() -> TestResult {
        let config = test_config();

        let five_pages = calculate_price(&config, 5, true, true, 2)?;
        let six_pages = calculate_price(&config, 6, true, true, 2)?;
        let three_copies = calculate_price(&config, 5, true, true, 3)?;

        assert!(six_pages.total >= five_pages.total, "more pages, more money");
        assert!(
            three_copies.total >= five_pages.total,
            "more copies, more money"
        );

        Ok(())
    }

    #[test]
    fn zero_pages_yield_zero_total() -> TestResult {
        let breakdown = calculate_price(&test_config(), 0, true, true, 2)?;

        assert_eq!(breakdown.total, Money::ZERO);

        Ok(())
    }

    #[test]
    fn idempotent_for_identical_inputs() -> TestResult {
        let config = test_config();

        let first = calculate_price(&config, 7, true, true, 3)?;
        let second = calculate_price(&config, 7, true, true, 3)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn overflow_returns_error() {
        let config = PricingConfig {
            base_price: Money::from_minor(i64::MAX),
            color_multiplier: Decimal::from(u32::MAX),
            duplex_multiplier: Decimal::ONE,
            currency: "USD".to_string(),
        };

        let result = calculate_price(&config, u32::MAX, true, false, u32::MAX);

        assert!(matches!(result, Err(PricingError::AmountOverflow)));
    }
}
