//! Platen prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    orders::{Document, OrderQuote, PrintOptions, quote},
    prices::{Money, PricingError},
    pricing::{PriceBreakdown, PricingConfig, calculate_price},
    products::{
        AppliedOption, OptionKind, Product, ProductError, ProductOption, ProductOptionValue,
        ProductPrice, price_product,
    },
    promotions::{
        AppliedDiscount, BestOffer, Discount, PromotionStatus, PromotionTerms, calculate_discount,
        select_best,
        status::{status, usage_percentage},
    },
    receipt::Receipt,
};
