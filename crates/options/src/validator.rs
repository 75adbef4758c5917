//! Validator data attached to option groups.
//!
//! Validators are stored as parsed data (option, comparator, raw value).
//! Evaluating them against a buyer's input is left to the storefront.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use custopt_core::DomainError;

use crate::translation::Translations;

/// Comparison operator of a condition or constraint.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Greater,
    GreaterEqual,
    Equal,
    LesserEqual,
    Lesser,
    InSet,
    NotInSet,
}

impl FromStr for Comparator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmp = match s {
            "greater" => Comparator::Greater,
            "greater_equal" => Comparator::GreaterEqual,
            "equal" => Comparator::Equal,
            "lesser_equal" => Comparator::LesserEqual,
            "lesser" => Comparator::Lesser,
            "in_set" => Comparator::InSet,
            "not_in_set" => Comparator::NotInSet,
            other => {
                return Err(DomainError::validation(format!("unknown comparator: {other}")));
            }
        };
        Ok(cmp)
    }
}

/// One condition or constraint: `<option> <comparator> <value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRule {
    pub customer_option_code: String,
    pub comparator: Comparator,
    pub value: String,
}

/// "If all conditions hold, all constraints must hold."
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub conditions: Vec<OptionRule>,
    pub constraints: Vec<OptionRule>,
    pub error_messages: Translations,
}

impl Validator {
    /// Option codes referenced by any rule, in order, without duplicates.
    pub fn referenced_options(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for rule in self.conditions.iter().chain(self.constraints.iter()) {
            if !codes.contains(&rule.customer_option_code.as_str()) {
                codes.push(rule.customer_option_code.as_str());
            }
        }
        codes
    }
}
