use serde::{Deserialize, Serialize};
use tracing::debug;

use custopt_core::{BasisPoints, DomainError, DomainResult, Money};

use super::require_translations;
use crate::option::{CustomerOption, CustomerOptionType};
use crate::price::{CustomerOptionValuePrice, OptionPricing};
use crate::translation::Translations;
use crate::value::CustomerOptionValue;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    Fixed,
    Percent,
}

/// Raw price entry; `amount` is required for `fixed`, `percent` for `percent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceConfig {
    #[serde(default)]
    pub channel_code: Option<String>,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(rename = "type")]
    pub pricing_type: PricingType,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub percent: Option<BasisPoints>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOptionValueConfig {
    pub code: String,
    #[serde(default)]
    pub translations: Option<Translations>,
    #[serde(default)]
    pub prices: Vec<PriceConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOptionConfig {
    pub code: String,
    #[serde(rename = "type")]
    pub option_type: CustomerOptionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub translations: Option<Translations>,
    #[serde(default)]
    pub values: Vec<CustomerOptionValueConfig>,
}

/// Builds customer options from config.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerOptionFactory;

impl CustomerOptionFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_from_config(&self, config: CustomerOptionConfig) -> DomainResult<CustomerOption> {
        if config.code.trim().is_empty() {
            return Err(DomainError::validation("customer option: code is required"));
        }

        let what = format!("customer option '{}'", config.code);
        let translations = require_translations(config.translations, &what)?;

        if !config.option_type.is_select() && !config.values.is_empty() {
            return Err(DomainError::validation(format!(
                "{what}: type '{}' cannot have values",
                config.option_type
            )));
        }

        let mut option = CustomerOption::new(config.code, config.option_type, translations)
            .required(config.required);

        for value_config in config.values {
            if option.value_by_code(&value_config.code).is_some() {
                return Err(DomainError::validation(format!(
                    "{what}: duplicate value '{}'",
                    value_config.code
                )));
            }
            let value = self.create_value(&what, value_config)?;
            option.values.push(value);
        }

        debug!(
            option_code = %option.code,
            option_type = %option.option_type,
            values = option.values.len(),
            "customer option created from config"
        );

        Ok(option)
    }

    fn create_value(
        &self,
        what: &str,
        config: CustomerOptionValueConfig,
    ) -> DomainResult<CustomerOptionValue> {
        let what = format!("{what}, value '{}'", config.code);
        let translations = require_translations(config.translations, &what)?;

        let mut value = CustomerOptionValue::new(config.code, translations);
        for price_config in config.prices {
            let price = Self::create_price(&what, price_config)?;
            if value.prices.iter().any(|p| p.has_same_scope(&price)) {
                return Err(DomainError::validation(format!(
                    "{what}: more than one price for channel {:?}, product {:?}",
                    price.channel_code, price.product_code
                )));
            }
            value.prices.push(price);
        }

        Ok(value)
    }

    /// Build a single value price (e.g. the template of a price import).
    pub fn create_price_from_config(
        &self,
        config: PriceConfig,
    ) -> DomainResult<CustomerOptionValuePrice> {
        Self::create_price("price", config)
    }

    fn create_price(what: &str, config: PriceConfig) -> DomainResult<CustomerOptionValuePrice> {
        let pricing = match (config.pricing_type, config.amount, config.percent) {
            (PricingType::Fixed, Some(amount), _) => OptionPricing::fixed(amount),
            (PricingType::Percent, _, Some(percent)) => OptionPricing::percent(percent),
            (PricingType::Fixed, None, _) => {
                return Err(DomainError::validation(format!(
                    "{what}: fixed price needs an amount"
                )));
            }
            (PricingType::Percent, _, None) => {
                return Err(DomainError::validation(format!(
                    "{what}: percent price needs a percent"
                )));
            }
        };

        Ok(CustomerOptionValuePrice {
            channel_code: config.channel_code,
            product_code: config.product_code,
            pricing,
        })
    }
}
