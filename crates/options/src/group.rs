//! Customer option groups: which options a product offers.

use serde::{Deserialize, Serialize};

use crate::option::CustomerOption;
use crate::product::Product;
use crate::translation::Translations;
use crate::validator::Validator;

/// Ordered set of options attached to a set of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOptionGroup {
    pub code: String,
    pub translations: Translations,
    pub options: Vec<CustomerOption>,
    pub products: Vec<Product>,
    pub validators: Vec<Validator>,
}

impl CustomerOptionGroup {
    pub fn new(code: impl Into<String>, translations: Translations) -> Self {
        Self {
            code: code.into(),
            translations,
            options: Vec::new(),
            products: Vec::new(),
            validators: Vec::new(),
        }
    }

    pub fn option(&self, code: &str) -> Option<&CustomerOption> {
        self.options.iter().find(|o| o.code == code)
    }

    pub fn applies_to(&self, product_code: &str) -> bool {
        self.products.iter().any(|p| p.code == product_code)
    }
}
