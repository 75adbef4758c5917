//! Discrete, priced choices of a customer option.

use serde::{Deserialize, Serialize};

use crate::price::CustomerOptionValuePrice;
use crate::translation::Translations;

/// A selectable value (e.g. "anti-glare coating") of a select-like option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOptionValue {
    pub code: String,
    pub translations: Translations,
    #[serde(default)]
    pub prices: Vec<CustomerOptionValuePrice>,
}

impl CustomerOptionValue {
    pub fn new(code: impl Into<String>, translations: Translations) -> Self {
        Self {
            code: code.into(),
            translations,
            prices: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: CustomerOptionValuePrice) -> Self {
        self.prices.push(price);
        self
    }

    pub fn name(&self, locale: &str, fallback: &str) -> &str {
        self.translations
            .resolve(locale, fallback)
            .unwrap_or(self.code.as_str())
    }

    /// Price for a sale of `product_code` in `channel_code`.
    ///
    /// The most specific applicable price wins: product and channel, then
    /// product only, then channel only, then the unscoped default.
    pub fn price_for(
        &self,
        channel_code: Option<&str>,
        product_code: Option<&str>,
    ) -> Option<&CustomerOptionValuePrice> {
        self.prices
            .iter()
            .filter(|p| p.applies_to(channel_code, product_code))
            .fold(None, |best: Option<&CustomerOptionValuePrice>, p| match best {
                Some(b) if b.specificity() >= p.specificity() => Some(b),
                _ => Some(p),
            })
    }

    /// Insert `price`, replacing an existing price of the same scope.
    /// Returns `true` when a price was replaced.
    pub fn set_price(&mut self, price: CustomerOptionValuePrice) -> bool {
        match self.prices.iter_mut().find(|p| p.has_same_scope(&price)) {
            Some(existing) => {
                *existing = price;
                true
            }
            None => {
                self.prices.push(price);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::OptionPricing;
    use custopt_core::Money;

    fn value() -> CustomerOptionValue {
        CustomerOptionValue::new("gold", Translations::new().with("en_US", "Gold"))
            .with_price(CustomerOptionValuePrice::new(OptionPricing::fixed(Money::from_minor(100))))
            .with_price(CustomerOptionValuePrice::for_channel(
                "WEB",
                OptionPricing::fixed(Money::from_minor(150)),
            ))
    }

    #[test]
    fn channel_specific_price_wins() {
        let v = value();
        let price = v.price_for(Some("WEB"), None).unwrap();
        assert_eq!(price.pricing, OptionPricing::fixed(Money::from_minor(150)));
    }

    #[test]
    fn unknown_channel_falls_back_to_default() {
        let v = value();
        let price = v.price_for(Some("POS"), None).unwrap();
        assert_eq!(price.pricing, OptionPricing::fixed(Money::from_minor(100)));
        assert_eq!(v.price_for(None, None), Some(price));
    }

    #[test]
    fn product_price_outranks_channel_price() {
        let mut v = value();
        v.set_price(
            CustomerOptionValuePrice::new(OptionPricing::fixed(Money::from_minor(90)))
                .for_product("ring"),
        );

        let price = v.price_for(Some("WEB"), Some("ring")).unwrap();
        assert_eq!(price.pricing, OptionPricing::fixed(Money::from_minor(90)));

        let other = v.price_for(Some("WEB"), Some("mug")).unwrap();
        assert_eq!(other.pricing, OptionPricing::fixed(Money::from_minor(150)));
    }

    #[test]
    fn set_price_replaces_same_scope_only() {
        let mut v = value();
        let replaced = v.set_price(CustomerOptionValuePrice::for_channel(
            "WEB",
            OptionPricing::fixed(Money::from_minor(175)),
        ));
        let added = v.set_price(
            CustomerOptionValuePrice::new(OptionPricing::fixed(Money::from_minor(1)))
                .for_product("ring"),
        );

        assert!(replaced);
        assert!(!added);
        assert_eq!(v.prices.len(), 3);
    }

    #[test]
    fn no_default_means_no_price_outside_channel() {
        let v = CustomerOptionValue::new("x", Translations::new()).with_price(
            CustomerOptionValuePrice::for_channel(
                "WEB",
                OptionPricing::fixed(Money::from_minor(1)),
            ),
        );
        assert!(v.price_for(Some("POS"), None).is_none());
        assert_eq!(v.name("en_US", "en_US"), "x");
    }
}
