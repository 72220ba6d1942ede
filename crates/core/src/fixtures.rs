//! Fixtures
//!
//! Deterministic sample catalog, pricing configuration and promotion terms
//! shared by unit tests, the conformance suite and the demo CLI.

use rust_decimal::Decimal;

use crate::{
    prices::Money,
    pricing::PricingConfig,
    products::{OptionKind, Product, ProductOption, ProductOptionValue},
    promotions::{Discount, PromotionTerms},
};

/// The reference pricing configuration: 10 minor units per page, 1.5x for
/// colour, 0.9x for duplex.
#[must_use]
pub fn pricing_config() -> PricingConfig {
    PricingConfig {
        base_price: Money::from_minor(10),
        color_multiplier: Decimal::new(15, 1),
        duplex_multiplier: Decimal::new(9, 1),
        currency: "USD".to_string(),
    }
}

fn value(token: &str, label: &str, modifier: i64) -> ProductOptionValue {
    ProductOptionValue {
        value: token.to_string(),
        label: label.to_string(),
        price_modifier: Money::from_minor(modifier),
        available: true,
        sort_order: 0,
    }
}

/// A poster product: selectable size plus a numeric copy count priced per
/// unit.
#[must_use]
pub fn poster() -> Product {
    Product {
        base_price: Money::from_minor(200),
        options: vec![
            ProductOption {
                name: "size".to_string(),
                label: "Size".to_string(),
                kind: OptionKind::Select,
                required: true,
                sort_order: 0,
                values: vec![
                    value("5x5", "5\" x 5\"", 0),
                    value("10x10", "10\" x 10\"", 150),
                    value("20x20", "20\" x 20\"", 400),
                ],
            },
            ProductOption {
                name: "quantity".to_string(),
                label: "Copies".to_string(),
                kind: OptionKind::Number,
                required: true,
                sort_order: 1,
                values: vec![value("copies", "Copies", 500)],
            },
        ],
    }
}

/// A business-card product with flat option modifiers, including a negative
/// one.
#[must_use]
pub fn business_cards() -> Product {
    Product {
        base_price: Money::from_minor(500),
        options: vec![
            ProductOption {
                name: "paper".to_string(),
                label: "Paper".to_string(),
                kind: OptionKind::Select,
                required: true,
                sort_order: 0,
                values: vec![
                    value("standard", "Standard", 0),
                    value("premium", "Premium", 250),
                    value("recycled", "Recycled", -50),
                ],
            },
            ProductOption {
                name: "finish".to_string(),
                label: "Finish".to_string(),
                kind: OptionKind::Radio,
                required: false,
                sort_order: 1,
                values: vec![value("matte", "Matte", 0), value("gloss", "Gloss", 100)],
            },
        ],
    }
}

/// The sample catalog as name/product pairs.
#[must_use]
pub fn catalog() -> Vec<(&'static str, Product)> {
    vec![("poster", poster()), ("business-cards", business_cards())]
}

/// Sample promotion terms: a 20% seasonal discount, a fixed 150-unit voucher
/// gated on a 1000-unit minimum purchase, and a bundle amount.
#[must_use]
pub fn promotion_terms() -> Vec<PromotionTerms> {
    vec![
        PromotionTerms {
            discount: Discount::Percentage {
                percent: Decimal::from(20),
            },
            min_purchase: None,
        },
        PromotionTerms {
            discount: Discount::FixedAmount {
                amount: Money::from_minor(150),
            },
            min_purchase: Some(Money::from_minor(1000)),
        },
        PromotionTerms {
            discount: Discount::Bundle {
                amount: Money::from_minor(300),
            },
            min_purchase: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn fixture_products_are_well_formed() -> TestResult {
        for (name, product) in catalog() {
            product
                .validate()
                .map_err(|error| format!("{name}: {error}"))?;
        }

        Ok(())
    }

    #[test]
    fn pricing_config_factors() {
        let config = pricing_config();

        assert!(config.color_multiplier > Decimal::ONE, "colour costs more");
        assert!(config.duplex_multiplier < Decimal::ONE, "duplex costs less");
    }
}
