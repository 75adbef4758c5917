//! Customer option adjustments.
//!
//! Every priced customer option selection on an item becomes one adjustment
//! per unit. The recalculator owns all adjustments of its kind: each pass
//! removes them and rebuilds them from the current selections, so running it
//! repeatedly never accumulates duplicates.

use tracing::{debug, info};

use custopt_core::{DomainResult, Entity};

use crate::adjustment::{Adjustment, AdjustmentFactory, DefaultAdjustmentFactory};
use crate::order::{Order, OrderItem};
use crate::processor::OrderProcessor;

/// Adjustment kind owned by [`CustomerOptionRecalculator`].
pub const CUSTOMER_OPTION_ADJUSTMENT: &str = "customer_option";

#[derive(Debug, Clone, Default)]
pub struct CustomerOptionRecalculator<F = DefaultAdjustmentFactory> {
    adjustment_factory: F,
}

impl CustomerOptionRecalculator {
    pub fn new() -> Self {
        Self::with_factory(DefaultAdjustmentFactory)
    }
}

impl<F: AdjustmentFactory> CustomerOptionRecalculator<F> {
    pub fn with_factory(adjustment_factory: F) -> Self {
        Self { adjustment_factory }
    }

    /// Attach one adjustment per priced selection to every unit of `item`.
    /// Returns the number of adjustments added.
    fn add_order_item_adjustments(&self, item: &mut OrderItem) -> DomainResult<usize> {
        let unit_price = item.unit_price();

        // Selections without a value (text, number, ...) carry no price.
        let adjustments = item
            .customer_option_configuration()
            .iter()
            .filter(|selection| selection.customer_option_value().is_some())
            .map(|selection| {
                let amount = selection.calculated_price(unit_price)?;
                Ok(self.adjustment_factory.create_with_data(
                    CUSTOMER_OPTION_ADJUSTMENT,
                    selection.customer_option_name(),
                    amount,
                    false,
                ))
            })
            .collect::<DomainResult<Vec<Adjustment>>>()?;

        let units = item.units_mut();
        for unit in units.iter_mut() {
            for adjustment in &adjustments {
                unit.add_adjustment(adjustment.clone());
            }
        }

        let added = adjustments.len() * units.len();
        debug!(
            item_id = %item.id(),
            product_code = item.product_code(),
            priced_selections = adjustments.len(),
            units = item.quantity(),
            added,
            "customer option adjustments attached"
        );

        Ok(added)
    }
}

impl<F: AdjustmentFactory> OrderProcessor for CustomerOptionRecalculator<F> {
    fn process(&self, order: &mut Order) -> DomainResult<()> {
        order.remove_adjustments_recursively(CUSTOMER_OPTION_ADJUSTMENT);

        let mut added = 0;
        for item in order.items_mut() {
            added += self.add_order_item_adjustments(item)?;
        }

        let total = order.recalculate_totals()?;

        info!(
            order_id = %order.id_typed(),
            items = order.items().len(),
            adjustments = added,
            total = %total,
            "customer option adjustments recalculated"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use custopt_core::{BasisPoints, Money, OrderId};
    use custopt_options::OptionPricing;

    use crate::item_option::{OrderItemOption, SelectedValue};
    use crate::order::OrderItem;

    fn test_order() -> Order {
        Order::new(OrderId::new(), "EUR", Utc::now())
    }

    fn priced(name: &str, amount: i64) -> OrderItemOption {
        OrderItemOption::priced(
            name,
            name,
            SelectedValue {
                code: format!("{name}_value"),
                name: name.to_string(),
            },
            OptionPricing::fixed(Money::from_minor(amount)),
        )
    }

    fn option_adjustments(order: &Order) -> Vec<(String, Money)> {
        order
            .adjustments_recursively(Some(CUSTOMER_OPTION_ADJUSTMENT))
            .map(|a| (a.label().to_string(), a.amount()))
            .collect()
    }

    #[test]
    fn single_priced_option_adds_one_adjustment() {
        let mut order = test_order();
        order
            .add_item(
                OrderItem::new("glasses", Money::from_minor(1000), 1)
                    .with_option(priced("Coating", 250)),
            )
            .unwrap();

        CustomerOptionRecalculator::new().process(&mut order).unwrap();

        let unit = &order.items()[0].units()[0];
        let adjustments: Vec<_> = unit.adjustments_of_kind(CUSTOMER_OPTION_ADJUSTMENT).collect();
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments[0].amount(), Money::from_minor(250));
        assert_eq!(adjustments[0].label(), "Coating");
        assert!(!adjustments[0].is_neutral());
        assert_eq!(order.total(), Money::from_minor(1250));
    }

    #[test]
    fn percent_option_uses_the_unit_price() {
        let mut order = test_order();
        let selection = OrderItemOption::priced(
            "coating",
            "Coating",
            SelectedValue {
                code: "uv".to_string(),
                name: "UV".to_string(),
            },
            OptionPricing::percent(BasisPoints::from_percent(10)),
        );
        order
            .add_item(OrderItem::new("glasses", Money::from_minor(1999), 2).with_option(selection))
            .unwrap();

        CustomerOptionRecalculator::new().process(&mut order).unwrap();

        assert_eq!(
            option_adjustments(&order),
            vec![
                ("Coating".to_string(), Money::from_minor(200)),
                ("Coating".to_string(), Money::from_minor(200)),
            ]
        );
    }

    #[test]
    fn text_selection_adds_nothing() {
        let mut order = test_order();
        order
            .add_item(
                OrderItem::new("ring", Money::from_minor(5000), 1)
                    .with_option(OrderItemOption::text("engraving", "Engraving", "Ada")),
            )
            .unwrap();

        CustomerOptionRecalculator::new().process(&mut order).unwrap();

        assert!(option_adjustments(&order).is_empty());
        assert_eq!(order.total(), Money::from_minor(5000));
    }

    #[test]
    fn overflow_is_reported() {
        let mut order = test_order();
        order
            .add_item(
                OrderItem::new("ring", Money::from_minor(i64::MAX), 1)
                    .with_option(priced("Gold", 1)),
            )
            .unwrap();

        let err = CustomerOptionRecalculator::new()
            .process(&mut order)
            .unwrap_err();
        assert!(matches!(err, custopt_core::DomainError::InvariantViolation(_)));
    }
}
