//! Prices attached to customer option values.

use serde::{Deserialize, Serialize};

use custopt_core::{BasisPoints, DomainResult, Money, ValueObject};

/// How a value's surcharge is derived from the item's unit price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionPricing {
    /// Constant amount per unit, independent of the unit price.
    Fixed { amount: Money },
    /// Share of the unit price.
    Percent { percent: BasisPoints },
}

impl OptionPricing {
    pub fn fixed(amount: Money) -> Self {
        Self::Fixed { amount }
    }

    pub fn percent(percent: BasisPoints) -> Self {
        Self::Percent { percent }
    }

    /// Price delta for one unit priced at `base`.
    pub fn calculate(&self, base: Money) -> DomainResult<Money> {
        match self {
            OptionPricing::Fixed { amount } => Ok(*amount),
            OptionPricing::Percent { percent } => base.percentage(*percent),
        }
    }
}

impl ValueObject for OptionPricing {}

/// A value's price, optionally restricted to one sales channel and/or one
/// product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOptionValuePrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(flatten)]
    pub pricing: OptionPricing,
}

impl CustomerOptionValuePrice {
    pub fn new(pricing: OptionPricing) -> Self {
        Self {
            channel_code: None,
            product_code: None,
            pricing,
        }
    }

    pub fn for_channel(channel_code: impl Into<String>, pricing: OptionPricing) -> Self {
        Self {
            channel_code: Some(channel_code.into()),
            ..Self::new(pricing)
        }
    }

    /// Same price, restricted to `product_code`.
    pub fn for_product(&self, product_code: impl Into<String>) -> Self {
        Self {
            product_code: Some(product_code.into()),
            ..self.clone()
        }
    }

    /// Neither channel- nor product-specific.
    pub fn is_default(&self) -> bool {
        self.channel_code.is_none() && self.product_code.is_none()
    }

    /// Whether both prices target the same channel and product.
    pub fn has_same_scope(&self, other: &Self) -> bool {
        self.channel_code == other.channel_code && self.product_code == other.product_code
    }

    /// Applies to a sale of `product_code` in `channel_code`.
    pub fn applies_to(&self, channel_code: Option<&str>, product_code: Option<&str>) -> bool {
        let channel_ok =
            self.channel_code.is_none() || self.channel_code.as_deref() == channel_code;
        let product_ok =
            self.product_code.is_none() || self.product_code.as_deref() == product_code;
        channel_ok && product_ok
    }

    /// Higher is more specific: a product match outranks a channel match.
    pub(crate) fn specificity(&self) -> u8 {
        u8::from(self.product_code.is_some()) * 2 + u8::from(self.channel_code.is_some())
    }

    pub fn calculate(&self, base: Money) -> DomainResult<Money> {
        self.pricing.calculate(base)
    }
}
