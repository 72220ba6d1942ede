//! Environment-driven settings for the CLI and seeding.

use std::env;

use platen::{prices::Money, pricing::PricingConfig};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while reading settings from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable was set but could not be parsed.
    #[error("invalid value `{value}` for {name}")]
    InvalidValue {
        /// Environment variable name.
        name: &'static str,

        /// The offending value.
        value: String,
    },
}

/// Seed settings for the pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Price per page in minor units.
    pub base_price: Money,

    /// Colour printing factor.
    pub color_multiplier: Decimal,

    /// Duplex printing factor.
    pub duplex_multiplier: Decimal,

    /// ISO currency code.
    pub currency: String,
}

impl Settings {
    /// Reads settings from the process environment, falling back to the
    /// reference defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidValue`] when a set variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_source(|name| env::var(name).ok())
    }

    fn from_source(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, SettingsError> {
        Ok(Self {
            base_price: Money::from_minor(parse_var(&lookup, "PLATEN_BASE_PRICE_MINOR", 10)?),
            color_multiplier: parse_var(&lookup, "PLATEN_COLOR_MULTIPLIER", Decimal::new(15, 1))?,
            duplex_multiplier: parse_var(&lookup, "PLATEN_DUPLEX_MULTIPLIER", Decimal::new(9, 1))?,
            currency: lookup("PLATEN_CURRENCY").unwrap_or_else(|| "USD".to_string()),
        })
    }

    /// The pricing configuration these settings describe.
    #[must_use]
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            base_price: self.base_price,
            color_multiplier: self.color_multiplier,
            duplex_multiplier: self.duplex_multiplier,
            currency: self.currency.clone(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: impl Fn(&'static str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match lookup(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_err| SettingsError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_when_environment_is_empty() -> TestResult {
        let settings = Settings::from_source(|_name| None)?;

        assert_eq!(settings.base_price, Money::from_minor(10));
        assert_eq!(settings.color_multiplier, Decimal::new(15, 1));
        assert_eq!(settings.duplex_multiplier, Decimal::new(9, 1));
        assert_eq!(settings.currency, "USD");

        Ok(())
    }

    #[test]
    fn overrides_are_parsed() -> TestResult {
        let settings = Settings::from_source(|name| match name {
            "PLATEN_BASE_PRICE_MINOR" => Some("25".to_string()),
            "PLATEN_COLOR_MULTIPLIER" => Some("2.0".to_string()),
            "PLATEN_CURRENCY" => Some("GBP".to_string()),
            _ => None,
        })?;

        assert_eq!(settings.base_price, Money::from_minor(25));
        assert_eq!(settings.color_multiplier, Decimal::new(20, 1));
        assert_eq!(settings.currency, "GBP");

        Ok(())
    }

    #[test]
    fn unparseable_value_is_an_error() {
        let result = Settings::from_source(|name| {
            (name == "PLATEN_BASE_PRICE_MINOR").then(|| "ten".to_string())
        });

        assert!(matches!(
            result,
            Err(SettingsError::InvalidValue { name, .. }) if name == "PLATEN_BASE_PRICE_MINOR"
        ));
    }
}
