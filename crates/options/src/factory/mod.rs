//! Config-driven construction of catalog objects.
//!
//! Configs are plain serde structs, so a catalog can be loaded from JSON (or
//! any other serde format) and validated into domain objects in one step.

pub mod group;
pub mod option;

pub use group::{
    CustomerOptionGroupConfig, CustomerOptionGroupFactory, OptionRuleConfig, ValidatorConfig,
};
pub use option::{
    CustomerOptionConfig, CustomerOptionFactory, CustomerOptionValueConfig, PriceConfig,
    PricingType,
};

use custopt_core::{DomainError, DomainResult};

use crate::translation::Translations;

pub(crate) fn require_translations(
    translations: Option<Translations>,
    what: &str,
) -> DomainResult<Translations> {
    match translations {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(DomainError::validation(format!("{what}: translations are required"))),
    }
}
