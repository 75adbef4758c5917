//! Products that customer option groups attach to.

use serde::{Deserialize, Serialize};

/// Catalog product, referenced by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
