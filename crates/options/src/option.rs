//! Customer options: configurable product attributes.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use custopt_core::DomainError;

use crate::translation::Translations;
use crate::value::CustomerOptionValue;

/// Kind of input a buyer gives for an option.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerOptionType {
    Text,
    Select,
    MultiSelect,
    Number,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Boolean,
    File,
}

impl CustomerOptionType {
    /// Select-like options offer discrete (and possibly priced) values.
    pub fn is_select(self) -> bool {
        matches!(self, CustomerOptionType::Select | CustomerOptionType::MultiSelect)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerOptionType::Text => "text",
            CustomerOptionType::Select => "select",
            CustomerOptionType::MultiSelect => "multi_select",
            CustomerOptionType::Number => "number",
            CustomerOptionType::Date => "date",
            CustomerOptionType::DateTime => "datetime",
            CustomerOptionType::Boolean => "boolean",
            CustomerOptionType::File => "file",
        }
    }
}

impl core::fmt::Display for CustomerOptionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerOptionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "text" => CustomerOptionType::Text,
            "select" => CustomerOptionType::Select,
            "multi_select" => CustomerOptionType::MultiSelect,
            "number" => CustomerOptionType::Number,
            "date" => CustomerOptionType::Date,
            "datetime" => CustomerOptionType::DateTime,
            "boolean" => CustomerOptionType::Boolean,
            "file" => CustomerOptionType::File,
            other => {
                return Err(DomainError::validation(format!(
                    "unknown customer option type: {other}"
                )));
            }
        };
        Ok(ty)
    }
}

/// A configurable product attribute (e.g. "Lens coating", "Engraving").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOption {
    pub code: String,
    #[serde(rename = "type")]
    pub option_type: CustomerOptionType,
    #[serde(default)]
    pub required: bool,
    pub translations: Translations,
    #[serde(default)]
    pub values: Vec<CustomerOptionValue>,
}

impl CustomerOption {
    pub fn new(
        code: impl Into<String>,
        option_type: CustomerOptionType,
        translations: Translations,
    ) -> Self {
        Self {
            code: code.into(),
            option_type,
            required: false,
            translations,
            values: Vec::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_value(mut self, value: CustomerOptionValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn name(&self, locale: &str, fallback: &str) -> &str {
        self.translations
            .resolve(locale, fallback)
            .unwrap_or(self.code.as_str())
    }

    pub fn value_by_code(&self, code: &str) -> Option<&CustomerOptionValue> {
        self.values.iter().find(|v| v.code == code)
    }

    pub fn value_by_code_mut(&mut self, code: &str) -> Option<&mut CustomerOptionValue> {
        self.values.iter_mut().find(|v| v.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_parses_and_displays_symmetrically() {
        let names = [
            "text",
            "select",
            "multi_select",
            "number",
            "date",
            "datetime",
            "boolean",
            "file",
        ];
        for name in names {
            let ty: CustomerOptionType = name.parse().unwrap();
            assert_eq!(ty.to_string(), name);
        }
        assert!("colour".parse::<CustomerOptionType>().is_err());
    }

    #[test]
    fn only_select_types_are_select_like() {
        assert!(CustomerOptionType::Select.is_select());
        assert!(CustomerOptionType::MultiSelect.is_select());
        assert!(!CustomerOptionType::Text.is_select());
        assert!(!CustomerOptionType::Boolean.is_select());
    }

    #[test]
    fn value_lookup_by_code() {
        let option = CustomerOption::new(
            "coating",
            CustomerOptionType::Select,
            Translations::new().with("en_US", "Coating"),
        )
        .with_value(CustomerOptionValue::new("uv", Translations::new()));

        assert!(option.value_by_code("uv").is_some());
        assert!(option.value_by_code("blue").is_none());

        let mut option = option;
        option.value_by_code_mut("uv").unwrap().code = "uv400".to_string();
        assert!(option.value_by_code("uv400").is_some());
        assert_eq!(option.name("de_DE", "en_US"), "Coating");
    }
}
