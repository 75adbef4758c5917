//! Customer option selections attached to order items.

use serde::{Deserialize, Serialize};

use custopt_core::{DomainError, DomainResult, Money};
use custopt_options::{CustomerOption, CustomerOptionType, OptionPricing};

/// Value chosen for a select-like option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedValue {
    pub code: String,
    pub name: String,
}

/// Where a selection is made: sales channel, product and display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionContext<'a> {
    pub channel_code: Option<&'a str>,
    pub product_code: Option<&'a str>,
    pub locale: &'a str,
}

impl<'a> SelectionContext<'a> {
    pub fn new(locale: &'a str) -> Self {
        Self {
            channel_code: None,
            product_code: None,
            locale,
        }
    }

    pub fn channel(mut self, channel_code: Option<&'a str>) -> Self {
        self.channel_code = channel_code;
        self
    }

    pub fn product(mut self, product_code: &'a str) -> Self {
        self.product_code = Some(product_code);
        self
    }
}

/// One buyer selection on an order item.
///
/// Names and price are snapshots taken when the selection was made, so later
/// catalog edits do not change existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemOption {
    customer_option_code: String,
    customer_option_name: String,
    customer_option_type: CustomerOptionType,
    value: Option<SelectedValue>,
    pricing: Option<OptionPricing>,
    text: Option<String>,
}

impl OrderItemOption {
    /// Selection of a priced value.
    pub fn priced(
        option_code: impl Into<String>,
        option_name: impl Into<String>,
        value: SelectedValue,
        pricing: OptionPricing,
    ) -> Self {
        Self {
            customer_option_code: option_code.into(),
            customer_option_name: option_name.into(),
            customer_option_type: CustomerOptionType::Select,
            value: Some(value),
            pricing: Some(pricing),
            text: None,
        }
    }

    /// Free-text input; never priced.
    pub fn text(
        option_code: impl Into<String>,
        option_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            customer_option_code: option_code.into(),
            customer_option_name: option_name.into(),
            customer_option_type: CustomerOptionType::Text,
            value: None,
            pricing: None,
            text: Some(text.into()),
        }
    }

    /// Snapshot a buyer's choice from the catalog.
    ///
    /// For select-like options `value_code` picks the value and the price that
    /// applies in `context`; other option types keep `text` as the raw input.
    pub fn from_selection(
        option: &CustomerOption,
        value_code: Option<&str>,
        text: Option<&str>,
        context: SelectionContext<'_>,
    ) -> DomainResult<Self> {
        let locale = context.locale;
        let option_name = option.name(locale, locale).to_string();

        if !option.option_type.is_select() {
            if value_code.is_some() {
                return Err(DomainError::validation(format!(
                    "customer option '{}' of type '{}' takes no value",
                    option.code, option.option_type
                )));
            }
            return Ok(Self {
                customer_option_code: option.code.clone(),
                customer_option_name: option_name,
                customer_option_type: option.option_type,
                value: None,
                pricing: None,
                text: text.map(str::to_string),
            });
        }

        let Some(value_code) = value_code else {
            return Ok(Self {
                customer_option_code: option.code.clone(),
                customer_option_name: option_name,
                customer_option_type: option.option_type,
                value: None,
                pricing: None,
                text: None,
            });
        };

        let value = option.value_by_code(value_code).ok_or_else(|| {
            DomainError::validation(format!(
                "customer option '{}' has no value '{value_code}'",
                option.code
            ))
        })?;

        Ok(Self {
            customer_option_code: option.code.clone(),
            customer_option_name: option_name,
            customer_option_type: option.option_type,
            value: Some(SelectedValue {
                code: value.code.clone(),
                name: value.name(locale, locale).to_string(),
            }),
            pricing: value
                .price_for(context.channel_code, context.product_code)
                .map(|p| p.pricing),
            text: None,
        })
    }

    pub fn customer_option_code(&self) -> &str {
        &self.customer_option_code
    }

    pub fn customer_option_name(&self) -> &str {
        &self.customer_option_name
    }

    pub fn customer_option_value(&self) -> Option<&SelectedValue> {
        self.value.as_ref()
    }

    pub fn pricing(&self) -> Option<OptionPricing> {
        self.pricing
    }

    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the price snapshot.
    pub fn set_pricing(&mut self, pricing: Option<OptionPricing>) {
        self.pricing = pricing;
    }

    /// Price delta for one unit priced at `base_unit_price`.
    ///
    /// A selection without a price snapshot costs nothing.
    pub fn calculated_price(&self, base_unit_price: Money) -> DomainResult<Money> {
        match &self.pricing {
            Some(pricing) => pricing.calculate(base_unit_price),
            None => Ok(Money::ZERO),
        }
    }
}
