//! Order aggregate: order → items → units, each carrying adjustments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use custopt_core::{
    AggregateRoot, DomainError, DomainResult, Entity, Money, OrderId, OrderItemId,
    OrderItemUnitId,
};

use crate::adjustment::Adjustment;
use crate::item_option::OrderItemOption;

fn adjustments_total<'a, I>(adjustments: I) -> DomainResult<Money>
where
    I: IntoIterator<Item = &'a Adjustment>,
{
    Money::try_sum(
        adjustments
            .into_iter()
            .filter(|a| !a.is_neutral())
            .map(Adjustment::amount),
    )
}

/// Smallest priced entity: one countable instance of an order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemUnit {
    id: OrderItemUnitId,
    adjustments: Vec<Adjustment>,
}

impl OrderItemUnit {
    pub fn new() -> Self {
        Self::with_id(OrderItemUnitId::new())
    }

    pub fn with_id(id: OrderItemUnitId) -> Self {
        Self {
            id,
            adjustments: Vec::new(),
        }
    }

    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub fn adjustments_of_kind<'a>(
        &'a self,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a Adjustment> {
        self.adjustments.iter().filter(move |a| a.kind() == kind)
    }

    pub fn add_adjustment(&mut self, adjustment: Adjustment) {
        self.adjustments.push(adjustment);
    }

    pub fn remove_adjustments(&mut self, kind: &str) {
        self.adjustments.retain(|a| a.kind() != kind);
    }

    /// Sum of non-neutral adjustments.
    pub fn adjustments_total(&self) -> DomainResult<Money> {
        adjustments_total(&self.adjustments)
    }

    /// Unit price plus non-neutral adjustments.
    pub fn total(&self, unit_price: Money) -> DomainResult<Money> {
        unit_price.checked_add(self.adjustments_total()?)
    }
}

impl Default for OrderItemUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for OrderItemUnit {
    type Id = OrderItemUnitId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A purchased line: product, unit price, units and customer option selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    product_code: String,
    unit_price: Money,
    units: Vec<OrderItemUnit>,
    customer_option_configuration: Vec<OrderItemOption>,
    adjustments: Vec<Adjustment>,
    total: Money,
}

impl OrderItem {
    /// New item with `quantity` units.
    pub fn new(product_code: impl Into<String>, unit_price: Money, quantity: usize) -> Self {
        let mut item = Self {
            id: OrderItemId::new(),
            product_code: product_code.into(),
            unit_price,
            units: Vec::new(),
            customer_option_configuration: Vec::new(),
            adjustments: Vec::new(),
            total: Money::ZERO,
        };
        item.set_quantity(quantity);
        item
    }

    pub fn with_option(mut self, selection: OrderItemOption) -> Self {
        self.customer_option_configuration.push(selection);
        self
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> usize {
        self.units.len()
    }

    /// Grow or shrink the unit list to `quantity`. Shrinking drops the
    /// most recently added units first.
    pub fn set_quantity(&mut self, quantity: usize) {
        if quantity < self.units.len() {
            self.units.truncate(quantity);
        } else {
            let missing = quantity - self.units.len();
            self.units.extend((0..missing).map(|_| OrderItemUnit::new()));
        }
    }

    pub fn units(&self) -> &[OrderItemUnit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [OrderItemUnit] {
        &mut self.units
    }

    pub fn customer_option_configuration(&self) -> &[OrderItemOption] {
        &self.customer_option_configuration
    }

    pub fn customer_option_configuration_mut(&mut self) -> &mut Vec<OrderItemOption> {
        &mut self.customer_option_configuration
    }

    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub fn add_adjustment(&mut self, adjustment: Adjustment) {
        self.adjustments.push(adjustment);
    }

    /// Remove adjustments of `kind` from the item and all of its units.
    pub fn remove_adjustments_recursively(&mut self, kind: &str) {
        self.adjustments.retain(|a| a.kind() != kind);
        for unit in &mut self.units {
            unit.remove_adjustments(kind);
        }
    }

    /// Total as of the last `recalculate_total`.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of unit totals plus item-level non-neutral adjustments.
    pub fn recalculate_total(&mut self) -> DomainResult<Money> {
        let mut total = adjustments_total(&self.adjustments)?;
        for unit in &self.units {
            total = total.checked_add(unit.total(self.unit_price)?)?;
        }
        self.total = total;
        Ok(total)
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    channel_code: Option<String>,
    currency_code: String,
    locale_code: String,
    items: Vec<OrderItem>,
    adjustments: Vec<Adjustment>,
    items_total: Money,
    total: Money,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl Order {
    pub fn new(id: OrderId, currency_code: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            channel_code: None,
            currency_code: currency_code.into(),
            locale_code: "en_US".to_string(),
            items: Vec::new(),
            adjustments: Vec::new(),
            items_total: Money::ZERO,
            total: Money::ZERO,
            created_at,
            updated_at: created_at,
            version: 0,
        }
    }

    pub fn with_channel(mut self, channel_code: impl Into<String>) -> Self {
        self.channel_code = Some(channel_code.into());
        self
    }

    pub fn with_locale(mut self, locale_code: impl Into<String>) -> Self {
        self.locale_code = locale_code.into();
        self
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn channel_code(&self) -> Option<&str> {
        self.channel_code.as_deref()
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn locale_code(&self) -> &str {
        &self.locale_code
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: OrderItem) -> DomainResult<()> {
        if self.items.iter().any(|i| i.has_same_identity(&item)) {
            return Err(DomainError::conflict(format!(
                "order item {} already in order {}",
                item.id, self.id
            )));
        }
        self.items.push(item);
        self.version += 1;
        Ok(())
    }

    pub fn remove_item(&mut self, id: OrderItemId) -> DomainResult<OrderItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DomainError::not_found(format!("order item {id}")))?;
        self.version += 1;
        Ok(self.items.remove(index))
    }

    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub fn add_adjustment(&mut self, adjustment: Adjustment) {
        self.adjustments.push(adjustment);
    }

    /// Remove adjustments of `kind` from the order, every item and every unit.
    pub fn remove_adjustments_recursively(&mut self, kind: &str) {
        self.adjustments.retain(|a| a.kind() != kind);
        for item in &mut self.items {
            item.remove_adjustments_recursively(kind);
        }
    }

    /// Every adjustment on the order, its items and units, optionally filtered
    /// by kind.
    pub fn adjustments_recursively<'a>(
        &'a self,
        kind: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Adjustment> + 'a {
        let nested = self.items.iter().flat_map(|item| {
            item.adjustments
                .iter()
                .chain(item.units.iter().flat_map(|u| u.adjustments.iter()))
        });
        self.adjustments
            .iter()
            .chain(nested)
            .filter(move |a| kind.is_none_or(|k| a.kind() == k))
    }

    /// Sum of non-neutral adjustments anywhere in the order.
    pub fn adjustments_total_recursively(&self, kind: Option<&str>) -> DomainResult<Money> {
        adjustments_total(self.adjustments_recursively(kind))
    }

    pub fn items_total(&self) -> Money {
        self.items_total
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Recompute every item total, the items total and the order total.
    pub fn recalculate_totals(&mut self) -> DomainResult<Money> {
        let mut items_total = Money::ZERO;
        for item in &mut self.items {
            items_total = items_total.checked_add(item.recalculate_total()?)?;
        }
        self.items_total = items_total;
        self.total = items_total.checked_add(adjustments_total(&self.adjustments)?)?;
        Ok(self.total)
    }

    /// Record a completed processing pass.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
        self.version += 1;
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
