//! Order quoting
//!
//! Combines uploaded document page counts with the chosen print options and
//! delegates to the document pricing formula.

use serde::{Deserialize, Serialize};

use crate::{
    prices::PricingError,
    pricing::{PriceBreakdown, PricingConfig, calculate_price},
};

/// Print options chosen for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOptions {
    /// Colour printing.
    pub color: bool,

    /// Double-sided printing.
    pub duplex: bool,

    /// Number of copies.
    pub quantity: u32,
}

/// An uploaded document's pricing-relevant metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Original file name, display only.
    pub name: String,

    /// Page count reported by the upload pipeline.
    pub pages: u32,
}

/// A priced order before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuote {
    /// Pages summed across every document.
    pub total_pages: u32,

    /// The options the quote was computed for.
    pub options: PrintOptions,

    /// Itemised price.
    pub breakdown: PriceBreakdown,
}

/// Quotes an order: sums document pages and prices the total.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the page sum or the price
/// computation overflows.
pub fn quote(
    config: &PricingConfig,
    documents: &[Document],
    options: &PrintOptions,
) -> Result<OrderQuote, PricingError> {
    let total_pages = documents
        .iter()
        .try_fold(0_u32, |sum, document| sum.checked_add(document.pages))
        .ok_or(PricingError::AmountOverflow)?;

    let breakdown = calculate_price(
        config,
        total_pages,
        options.color,
        options.duplex,
        options.quantity,
    )?;

    Ok(OrderQuote {
        total_pages,
        options: *options,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::prices::Money;

    use super::*;

    fn test_config() -> PricingConfig {
        PricingConfig {
            base_price: Money::from_minor(10),
            color_multiplier: Decimal::new(15, 1),
            duplex_multiplier: Decimal::new(9, 1),
            currency: "USD".to_string(),
        }
    }

    fn document(name: &str, pages: u32) -> Document {
        Document {
            name: name.to_string(),
            pages,
        }
    }

    #[test]
    fn sums_pages_across_documents() -> TestResult {
        let documents = [document("flyer.pdf", 2), document("report.pdf", 3)];
        let options = PrintOptions {
            color: true,
            duplex: false,
            quantity: 2,
        };

        let quote = quote(&test_config(), &documents, &options)?;

        assert_eq!(quote.total_pages, 5);
        assert_eq!(quote.breakdown.total, Money::from_minor(150));
        assert_eq!(quote.options, options);

        Ok(())
    }

    #[test]
    fn no_documents_quote_to_zero() -> TestResult {
        let options = PrintOptions {
            color: false,
            duplex: false,
            quantity: 1,
        };

        let quote = quote(&test_config(), &[], &options)?;

        assert_eq!(quote.total_pages, 0);
        assert_eq!(quote.breakdown.total, Money::ZERO);

        Ok(())
    }

    #[test]
    fn page_sum_overflow_returns_error() {
        let documents = [document("a.pdf", u32::MAX), document("b.pdf", 1)];
        let options = PrintOptions {
            color: false,
            duplex: false,
            quantity: 1,
        };

        let result = quote(&test_config(), &documents, &options);

        assert!(matches!(result, Err(PricingError::AmountOverflow)));
    }
}
