//! Promotions
//!
//! Pure promotion arithmetic: discount computation against an original
//! price, and best-offer selection over a candidate list. Temporal status
//! derivation lives in [`status`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::prices::{Money, PricingError};

pub mod status;

pub use status::{PromotionStatus, usage_percentage};

/// The discount a promotion grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage of the original price, 0–100.
    Percentage {
        /// Percent value.
        percent: Decimal,
    },

    /// Fixed amount off the original price.
    FixedAmount {
        /// Amount in minor units.
        amount: Money,
    },

    /// Bundle pricing. Kept as a distinct case so real bundle logic can land
    /// without an interface change; until then it uses the fixed-amount
    /// formula.
    Bundle {
        /// Amount in minor units.
        amount: Money,
    },
}

/// The computation-relevant slice of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionTerms {
    /// Discount granted when the promotion applies.
    pub discount: Discount,

    /// Minimum original price; below it the promotion grants zero discount.
    pub min_purchase: Option<Money>,
}

/// A discount applied to a concrete original price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// Amount taken off, clamped to `[0, original]`.
    pub discount_amount: Money,

    /// Original price minus the discount, never negative.
    pub final_price: Money,
}

/// The winning candidate from a best-offer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestOffer {
    /// Index of the winner within the candidate slice.
    pub index: usize,

    /// The winner's discount against the original price.
    pub applied: AppliedDiscount,
}

/// Computes the discount the given terms grant on an original price.
///
/// A purchase below `min_purchase` yields a zero discount rather than an
/// error. The discount amount is clamped to `[0, original]`, so a negative
/// configured amount grants nothing and an oversized one never pushes the
/// final price below zero.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the percentage arithmetic
/// overflows.
pub fn calculate_discount(
    terms: &PromotionTerms,
    original: Money,
) -> Result<AppliedDiscount, PricingError> {
    if let Some(min_purchase) = terms.min_purchase
        && original < min_purchase
    {
        return Ok(AppliedDiscount {
            discount_amount: Money::ZERO,
            final_price: original,
        });
    }

    let raw = match terms.discount {
        Discount::Percentage { percent } => original.scale(percent / Decimal::ONE_HUNDRED)?,
        Discount::FixedAmount { amount } | Discount::Bundle { amount } => amount,
    };

    let discount_amount = raw.max(Money::ZERO).min(original);
    let final_price = original.checked_sub(discount_amount)?;

    Ok(AppliedDiscount {
        discount_amount,
        final_price,
    })
}

/// Selects the candidate granting the greatest discount.
///
/// Candidates are expected pre-sorted by priority descending; the fold keeps
/// strictly greater discounts only, so on an exact tie the earliest (highest
/// priority) candidate wins. A zero-amount best offer is still returned: a
/// purchase below every minimum yields `{0, original}` rather than no offer.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if any candidate's discount
/// computation overflows.
pub fn select_best(
    candidates: &[PromotionTerms],
    original: Money,
) -> Result<Option<BestOffer>, PricingError> {
    let mut best: Option<BestOffer> = None;

    for (index, terms) in candidates.iter().enumerate() {
        let applied = calculate_discount(terms, original)?;

        let better = match &best {
            Some(current) => applied.discount_amount > current.applied.discount_amount,
            None => true,
        };

        if better {
            best = Some(BestOffer { index, applied });
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn percentage(percent: i64) -> PromotionTerms {
        PromotionTerms {
            discount: Discount::Percentage {
                percent: Decimal::from(percent),
            },
            min_purchase: None,
        }
    }

    fn fixed(amount: i64) -> PromotionTerms {
        PromotionTerms {
            discount: Discount::FixedAmount {
                amount: Money::from_minor(amount),
            },
            min_purchase: None,
        }
    }

    #[test]
    fn percentage_discount() -> TestResult {
        let applied = calculate_discount(&percentage(20), Money::from_minor(100))?;

        assert_eq!(applied.discount_amount, Money::from_minor(20));
        assert_eq!(applied.final_price, Money::from_minor(80));

        Ok(())
    }

    #[test]
    fn percentage_rounds_midpoint_away_from_zero() -> TestResult {
        // 25% of 50 minor units is 12.5, rounding to 13.
        let applied = calculate_discount(&percentage(25), Money::from_minor(50))?;

        assert_eq!(applied.discount_amount, Money::from_minor(13));
        assert_eq!(applied.final_price, Money::from_minor(37));

        Ok(())
    }

    #[test]
    fn fixed_amount_discount() -> TestResult {
        let applied = calculate_discount(&fixed(30), Money::from_minor(100))?;

        assert_eq!(applied.discount_amount, Money::from_minor(30));
        assert_eq!(applied.final_price, Money::from_minor(70));

        Ok(())
    }

    #[test]
    fn bundle_uses_fixed_amount_formula() -> TestResult {
        let bundle = PromotionTerms {
            discount: Discount::Bundle {
                amount: Money::from_minor(30),
            },
            min_purchase: None,
        };

        assert_eq!(
            calculate_discount(&bundle, Money::from_minor(100))?,
            calculate_discount(&fixed(30), Money::from_minor(100))?
        );

        Ok(())
    }

    #[test]
    fn below_min_purchase_grants_nothing() -> TestResult {
        let terms = PromotionTerms {
            min_purchase: Some(Money::from_minor(500)),
            ..percentage(20)
        };

        let applied = calculate_discount(&terms, Money::from_minor(499))?;

        assert_eq!(applied.discount_amount, Money::ZERO);
        assert_eq!(applied.final_price, Money::from_minor(499));

        Ok(())
    }

    #[test]
    fn exactly_min_purchase_grants_discount() -> TestResult {
        let terms = PromotionTerms {
            min_purchase: Some(Money::from_minor(500)),
            ..percentage(20)
        };

        let applied = calculate_discount(&terms, Money::from_minor(500))?;

        assert_eq!(applied.discount_amount, Money::from_minor(100));

        Ok(())
    }

    #[test]
    fn oversized_discount_clamps_to_original() -> TestResult {
        let applied = calculate_discount(&fixed(5000), Money::from_minor(100))?;

        assert_eq!(applied.discount_amount, Money::from_minor(100));
        assert_eq!(applied.final_price, Money::ZERO);

        Ok(())
    }

    #[test]
    fn negative_configured_amount_clamps_to_zero() -> TestResult {
        let applied = calculate_discount(&fixed(-50), Money::from_minor(100))?;

        assert_eq!(applied.discount_amount, Money::ZERO);
        assert_eq!(applied.final_price, Money::from_minor(100));

        Ok(())
    }

    #[test]
    fn invariants_hold_across_samples() -> TestResult {
        let originals = [0_i64, 1, 99, 100, 101, 10_000];
        let terms = [percentage(0), percentage(50), percentage(100), fixed(150)];

        for original in originals {
            let original = Money::from_minor(original);

            for term in &terms {
                let applied = calculate_discount(term, original)?;

                assert!(
                    applied.discount_amount >= Money::ZERO,
                    "discount is never negative"
                );
                assert!(
                    applied.discount_amount <= original,
                    "discount never exceeds the original price"
                );
                assert_eq!(
                    applied.final_price,
                    original.checked_sub(applied.discount_amount)?,
                    "final price is original minus discount"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn select_best_empty_returns_none() -> TestResult {
        assert_eq!(select_best(&[], Money::from_minor(100))?, None);

        Ok(())
    }

    #[test]
    fn select_best_prefers_greater_discount() -> TestResult {
        let candidates = [percentage(10), fixed(50), percentage(20)];

        let best = select_best(&candidates, Money::from_minor(100))?.ok_or("expected an offer")?;

        assert_eq!(best.index, 1);
        assert_eq!(best.applied.discount_amount, Money::from_minor(50));

        Ok(())
    }

    #[test]
    fn select_best_tie_keeps_first_candidate() -> TestResult {
        // Equal 15-unit discounts: the earlier candidate, which the caller
        // sorted as higher priority, must win.
        let candidates = [percentage(15), fixed(15)];

        let best = select_best(&candidates, Money::from_minor(100))?.ok_or("expected an offer")?;

        assert_eq!(best.index, 0);

        Ok(())
    }

    #[test]
    fn select_best_returns_zero_amount_offer() -> TestResult {
        let candidates = [PromotionTerms {
            min_purchase: Some(Money::from_minor(1000)),
            ..percentage(20)
        }];

        let best = select_best(&candidates, Money::from_minor(100))?.ok_or("expected an offer")?;

        assert_eq!(best.applied.discount_amount, Money::ZERO);
        assert_eq!(best.applied.final_price, Money::from_minor(100));

        Ok(())
    }
}
