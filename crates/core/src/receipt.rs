//! Receipt
//!
//! Plain-text rendering of an order quote, optionally with an applied
//! promotion, for CLI and stdout display.

use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{orders::OrderQuote, promotions::AppliedDiscount};

/// A renderable receipt for an order quote.
#[derive(Debug, Clone)]
pub struct Receipt {
    currency: String,
    rows: SmallVec<[(String, String); 10]>,
}

impl Receipt {
    /// Builds a receipt from a quote.
    #[must_use]
    pub fn from_quote(quote: &OrderQuote, currency: &str) -> Self {
        let breakdown = &quote.breakdown;

        let mut rows: SmallVec<[(String, String); 10]> = SmallVec::new();

        rows.push(("Pages".to_string(), quote.total_pages.to_string()));
        rows.push(("Copies".to_string(), breakdown.quantity.to_string()));
        rows.push((
            "Price per page".to_string(),
            breakdown.base_price.to_string(),
        ));
        rows.push((
            "Colour factor".to_string(),
            breakdown.color_multiplier.to_string(),
        ));
        rows.push((
            "Duplex factor".to_string(),
            breakdown.duplex_multiplier.to_string(),
        ));
        rows.push(("Subtotal".to_string(), breakdown.subtotal.to_string()));
        rows.push(("Total".to_string(), breakdown.total.to_string()));

        Self {
            currency: currency.to_string(),
            rows,
        }
    }

    /// Adds discount and adjusted-total rows for an applied promotion.
    #[must_use]
    pub fn with_discount(mut self, promotion_name: &str, applied: &AppliedDiscount) -> Self {
        self.rows.push((
            format!("Discount ({promotion_name})"),
            format!("-{}", applied.discount_amount),
        ));
        self.rows
            .push(("Total after discount".to_string(), applied.final_price.to_string()));

        self
    }

    /// Renders the receipt as a text table.
    #[must_use]
    pub fn render(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Item".to_string(), format!("Amount ({})", self.currency)]);

        for (label, amount) in &self.rows {
            builder.push_record([label.as_str(), amount.as_str()]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::last(), Alignment::right());

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        orders::{Document, PrintOptions, quote},
        prices::Money,
        pricing::PricingConfig,
    };

    use super::*;

    fn sample_quote() -> Result<OrderQuote, crate::prices::PricingError> {
        let config = PricingConfig {
            base_price: Money::from_minor(10),
            color_multiplier: Decimal::new(15, 1),
            duplex_multiplier: Decimal::new(9, 1),
            currency: "USD".to_string(),
        };

        let documents = [Document {
            name: "flyer.pdf".to_string(),
            pages: 5,
        }];

        quote(
            &config,
            &documents,
            &PrintOptions {
                color: true,
                duplex: false,
                quantity: 2,
            },
        )
    }

    #[test]
    fn render_includes_totals_and_currency() -> TestResult {
        let rendered = Receipt::from_quote(&sample_quote()?, "USD").render();

        assert!(rendered.contains("Amount (USD)"), "currency header");
        assert!(rendered.contains("Total"), "total row");
        assert!(rendered.contains("1.50"), "subtotal amount");

        Ok(())
    }

    #[test]
    fn discount_rows_follow_the_total() -> TestResult {
        let applied = AppliedDiscount {
            discount_amount: Money::from_minor(30),
            final_price: Money::from_minor(120),
        };

        let rendered = Receipt::from_quote(&sample_quote()?, "USD")
            .with_discount("Spring Sale", &applied)
            .render();

        assert!(rendered.contains("Discount (Spring Sale)"), "discount row");
        assert!(rendered.contains("-0.30"), "discount amount");
        assert!(rendered.contains("Total after discount"), "adjusted total");

        Ok(())
    }
}
