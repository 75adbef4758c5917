//! Cart input: the order to price, with the buyer's option selections.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use custopt_core::{DomainError, DomainResult, Money, OrderId};
use custopt_options::CustomerOptionType;
use custopt_orders::{Order, OrderItem, OrderItemOption, SelectionContext};

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    pub option: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_code: String,
    pub unit_price: Money,
    pub quantity: usize,
    #[serde(default)]
    pub selections: Vec<SelectionInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartFile {
    pub currency_code: String,
    #[serde(default)]
    pub channel_code: Option<String>,
    #[serde(default)]
    pub locale_code: Option<String>,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartFile {
    pub fn into_order(self, catalog: &Catalog) -> DomainResult<Order> {
        let mut order = Order::new(OrderId::new(), self.currency_code, Utc::now());
        if let Some(channel) = self.channel_code {
            order = order.with_channel(channel);
        }
        if let Some(locale) = self.locale_code {
            order = order.with_locale(locale);
        }

        for cart_item in self.items {
            let item = build_item(catalog, &order, cart_item)?;
            order.add_item(item)?;
        }

        Ok(order)
    }
}

fn build_item(catalog: &Catalog, order: &Order, cart_item: CartItem) -> DomainResult<OrderItem> {
    let product = cart_item.product_code.as_str();
    let mut item = OrderItem::new(product, cart_item.unit_price, cart_item.quantity);
    let context = SelectionContext::new(order.locale_code())
        .channel(order.channel_code())
        .product(product);

    for selection in &cart_item.selections {
        let option = catalog
            .offered_option(product, &selection.option)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "customer option '{}' is not offered for product '{product}'",
                    selection.option
                ))
            })?;

        // Only multi_select takes several answers, each with its own value.
        let mut earlier = item
            .customer_option_configuration()
            .iter()
            .filter(|o| o.customer_option_code() == option.code);
        let repeated = if option.option_type == CustomerOptionType::MultiSelect {
            earlier.any(|o| {
                o.customer_option_value().map(|v| v.code.as_str()) == selection.value.as_deref()
            })
        } else {
            earlier.next().is_some()
        };
        if repeated {
            return Err(DomainError::validation(format!(
                "customer option '{}' selected more than once for product '{product}'",
                option.code
            )));
        }

        let item_option = OrderItemOption::from_selection(
            option,
            selection.value.as_deref(),
            selection.text.as_deref(),
            context,
        )?;
        item.customer_option_configuration_mut().push(item_option);
    }

    for required in catalog.required_options(product) {
        let answered = item.customer_option_configuration().iter().any(|o| {
            o.customer_option_code() == required.code
                && (o.customer_option_value().is_some()
                    || o.text_value().is_some_and(|t| !t.trim().is_empty()))
        });
        if !answered {
            return Err(DomainError::validation(format!(
                "customer option '{}' is required for product '{product}'",
                required.code
            )));
        }
    }

    Ok(item)
}
