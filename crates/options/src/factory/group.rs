use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use custopt_core::{DomainError, DomainResult};

use super::require_translations;
use crate::group::CustomerOptionGroup;
use crate::option::CustomerOption;
use crate::repository::{CustomerOptionRepository, ProductRepository};
use crate::translation::Translations;
use crate::validator::{Comparator, OptionRule, Validator};

/// Raw condition/constraint. `value` accepts any JSON scalar and is kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRuleConfig {
    pub customer_option: String,
    pub comparator: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub conditions: Vec<OptionRuleConfig>,
    #[serde(default)]
    pub constraints: Vec<OptionRuleConfig>,
    #[serde(default)]
    pub error_messages: Translations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerOptionGroupConfig {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub translations: Option<Translations>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub validators: Vec<ValidatorConfig>,
}

/// Builds option groups from config, resolving option and product codes
/// through the repositories.
#[derive(Clone)]
pub struct CustomerOptionGroupFactory {
    options: Arc<dyn CustomerOptionRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CustomerOptionGroupFactory {
    pub fn new(
        options: Arc<dyn CustomerOptionRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self { options, products }
    }

    pub fn create_from_config(
        &self,
        config: CustomerOptionGroupConfig,
    ) -> DomainResult<CustomerOptionGroup> {
        let code = match config.code {
            Some(code) if !code.trim().is_empty() => code,
            _ => format!("group_{}", Uuid::now_v7().simple()),
        };

        let what = format!("customer option group '{code}'");
        let translations = require_translations(config.translations, &what)?;

        let mut group = CustomerOptionGroup::new(code, translations);

        for option_code in &config.options {
            group.options.push(self.resolve_option(&what, option_code)?);
        }

        group.products = self.products.find_by_codes(&config.products)?;

        for validator_config in config.validators {
            group.validators.push(self.create_validator(&what, validator_config)?);
        }

        debug!(
            group_code = %group.code,
            options = group.options.len(),
            products = group.products.len(),
            validators = group.validators.len(),
            "customer option group created from config"
        );

        Ok(group)
    }

    fn resolve_option(&self, what: &str, code: &str) -> DomainResult<CustomerOption> {
        self.options.find_one_by_code(code)?.ok_or_else(|| {
            DomainError::validation(format!("{what}: unknown customer option '{code}'"))
        })
    }

    fn create_validator(&self, what: &str, config: ValidatorConfig) -> DomainResult<Validator> {
        let conditions = config
            .conditions
            .into_iter()
            .map(|rule| self.create_rule(what, rule))
            .collect::<DomainResult<Vec<_>>>()?;

        let constraints = config
            .constraints
            .into_iter()
            .map(|rule| self.create_rule(what, rule))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Validator {
            conditions,
            constraints,
            error_messages: config.error_messages,
        })
    }

    fn create_rule(&self, what: &str, config: OptionRuleConfig) -> DomainResult<OptionRule> {
        let option = self.resolve_option(what, &config.customer_option)?;
        let comparator: Comparator = config.comparator.parse()?;

        let value = match config.value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };

        Ok(OptionRule {
            customer_option_code: option.code,
            comparator,
            value,
        })
    }
}

impl core::fmt::Debug for CustomerOptionGroupFactory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomerOptionGroupFactory").finish_non_exhaustive()
    }
}
