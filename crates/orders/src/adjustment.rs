//! Adjustments: monetary modifiers recorded against an order, item or unit.

use serde::{Deserialize, Serialize};

use custopt_core::{Money, ValueObject};

/// Immutable adjustment record.
///
/// `kind` is the category label processors use to find (and remove) their
/// own adjustments. Neutral adjustments (e.g. included tax) are informational
/// and do not change totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    kind: String,
    label: String,
    amount: Money,
    #[serde(default)]
    neutral: bool,
}

impl Adjustment {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn is_neutral(&self) -> bool {
        self.neutral
    }

    pub fn is_charge(&self) -> bool {
        self.amount.minor() > 0
    }

    pub fn is_credit(&self) -> bool {
        self.amount.minor() < 0
    }
}

impl ValueObject for Adjustment {}

/// Constructs adjustment records.
pub trait AdjustmentFactory: Send + Sync {
    fn create_with_data(&self, kind: &str, label: &str, amount: Money, neutral: bool)
    -> Adjustment;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAdjustmentFactory;

impl DefaultAdjustmentFactory {
    pub fn new() -> Self {
        Self
    }
}

impl AdjustmentFactory for DefaultAdjustmentFactory {
    fn create_with_data(
        &self,
        kind: &str,
        label: &str,
        amount: Money,
        neutral: bool,
    ) -> Adjustment {
        Adjustment {
            kind: kind.to_string(),
            label: label.to_string(),
            amount,
            neutral,
        }
    }
}

impl<F: AdjustmentFactory + ?Sized> AdjustmentFactory for std::sync::Arc<F> {
    fn create_with_data(
        &self,
        kind: &str,
        label: &str,
        amount: Money,
        neutral: bool,
    ) -> Adjustment {
        (**self).create_with_data(kind, label, amount, neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_copies_all_fields() {
        let adj = DefaultAdjustmentFactory::new().create_with_data(
            "tax",
            "VAT 19%",
            Money::from_minor(190),
            true,
        );
        assert_eq!(adj.kind(), "tax");
        assert_eq!(adj.label(), "VAT 19%");
        assert_eq!(adj.amount(), Money::from_minor(190));
        assert!(adj.is_neutral());
        assert!(adj.is_charge());
        assert!(!adj.is_credit());
    }
}
