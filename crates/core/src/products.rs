//! Products
//!
//! Catalog products carry a base price plus configurable options whose
//! selected values adjust it. Pricing is deliberately forgiving: selections
//! that do not resolve to a known option or value contribute nothing rather
//! than failing the calculation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prices::{Money, PricingError};

/// Errors raised when a product definition is internally inconsistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Two options on the same product share a name.
    #[error("duplicate option name `{0}`")]
    DuplicateOptionName(String),

    /// Two values within one option share a token.
    #[error("duplicate value token `{value}` on option `{option}`")]
    DuplicateValueToken {
        /// Option carrying the duplicate.
        option: String,

        /// The repeated token.
        value: String,
    },
}

/// How an option is presented and how its selection is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Dropdown choice; the selected value's modifier applies once.
    Select,

    /// Radio-button choice; the selected value's modifier applies once.
    Radio,

    /// Free numeric entry; the option's per-unit modifier is multiplied by
    /// the entered count.
    Number,
}

/// A selectable value within a product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionValue {
    /// Machine token identifying the value, unique within its option.
    pub value: String,

    /// Human-readable label.
    pub label: String,

    /// Signed price delta applied when this value is selected. For
    /// [`OptionKind::Number`] options this is the per-unit price.
    pub price_modifier: Money,

    /// Whether the value is currently offered.
    pub available: bool,

    /// Display ordering key.
    pub sort_order: i32,
}

/// A configurable option on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Machine name identifying the option, unique within its product.
    pub name: String,

    /// Human-readable label.
    pub label: String,

    /// Presentation and pricing behaviour.
    pub kind: OptionKind,

    /// Whether customers must pick a value.
    pub required: bool,

    /// Display ordering key.
    pub sort_order: i32,

    /// Selectable values in display order.
    pub values: Vec<ProductOptionValue>,
}

impl ProductOption {
    /// Finds a value by its token.
    #[must_use]
    pub fn value(&self, token: &str) -> Option<&ProductOptionValue> {
        self.values.iter().find(|value| value.value == token)
    }
}

/// A product with its pricing options.
///
/// Option names are unique within a product and value tokens unique within
/// an option; [`Product::validate`] rejects definitions that break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Price before any option modifiers, in minor units.
    pub base_price: Money,

    /// Options in display order.
    pub options: Vec<ProductOption>,
}

impl Product {
    /// Finds an option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|option| option.name == name)
    }

    /// Checks the uniqueness invariants on option names and value tokens.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] naming the first duplicate found.
    pub fn validate(&self) -> Result<(), ProductError> {
        let mut names: Vec<&str> = Vec::with_capacity(self.options.len());

        for option in &self.options {
            if names.contains(&option.name.as_str()) {
                return Err(ProductError::DuplicateOptionName(option.name.clone()));
            }

            names.push(&option.name);

            let mut tokens: Vec<&str> = Vec::with_capacity(option.values.len());

            for value in &option.values {
                if tokens.contains(&value.value.as_str()) {
                    return Err(ProductError::DuplicateValueToken {
                        option: option.name.clone(),
                        value: value.value.clone(),
                    });
                }

                tokens.push(&value.value);
            }
        }

        Ok(())
    }
}

/// One option that contributed to a product price, kept for display and
/// audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedOption {
    /// Label of the option.
    pub option_label: String,

    /// Label of the selected value, or the raw entry for numeric options.
    pub value_label: String,

    /// The contribution added to the unit price, already scaled for numeric
    /// options.
    pub price_modifier: Money,
}

/// Result of pricing a product against a set of selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPrice {
    /// Base price plus option contributions, before the quantity multiplier.
    pub unit_price: Money,

    /// Outer quantity multiplier.
    pub quantity: u32,

    /// `unit_price` times `quantity`.
    pub final_price: Money,

    /// Options that successfully resolved, in product display order.
    pub applied: Vec<AppliedOption>,
}

/// Prices a product for the given selections.
///
/// Selections map option names to selected value tokens; for
/// [`OptionKind::Number`] options the "token" is the entered count and the
/// option's first value supplies the per-unit price. Unknown option names,
/// unknown value tokens and unparseable or non-positive counts are skipped
/// silently; they contribute nothing and produce no applied entry.
///
/// Negative modifiers are allowed and the running total is not floored, so a
/// heavily discounted unit price may go negative. The outer `quantity` is an
/// independent multiplier on top of option-driven pricing.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if a contribution or the final
/// multiply leaves the representable range.
pub fn price_product(
    product: &Product,
    selections: &FxHashMap<String, String>,
    quantity: u32,
) -> Result<ProductPrice, PricingError> {
    let mut unit_price = product.base_price;
    let mut applied = Vec::new();

    for option in &product.options {
        let Some(selected) = selections.get(&option.name) else {
            continue;
        };

        let Some(entry) = resolve_selection(option, selected)? else {
            continue;
        };

        unit_price = unit_price.checked_add(entry.price_modifier)?;
        applied.push(entry);
    }

    let final_price = unit_price.checked_mul(i64::from(quantity))?;

    Ok(ProductPrice {
        unit_price,
        quantity,
        final_price,
        applied,
    })
}

/// Resolves one selection to its applied contribution, or `None` for the
/// silent-skip cases.
fn resolve_selection(
    option: &ProductOption,
    selected: &str,
) -> Result<Option<AppliedOption>, PricingError> {
    match option.kind {
        OptionKind::Number => {
            let Some(value) = option.values.first() else {
                return Ok(None);
            };

            let Ok(count) = selected.parse::<i64>() else {
                return Ok(None);
            };

            if count <= 0 {
                return Ok(None);
            }

            Ok(Some(AppliedOption {
                option_label: option.label.clone(),
                value_label: selected.to_string(),
                price_modifier: value.price_modifier.checked_mul(count)?,
            }))
        }
        OptionKind::Select | OptionKind::Radio => {
            let Some(value) = option.value(selected) else {
                return Ok(None);
            };

            Ok(Some(AppliedOption {
                option_label: option.label.clone(),
                value_label: value.label.clone(),
                price_modifier: value.price_modifier,
            }))
        }
    }
}
