//! Lookup abstractions for the catalog, plus in-memory implementations.

use std::collections::BTreeMap;
use std::sync::RwLock;

use custopt_core::{DomainError, DomainResult};

use crate::option::CustomerOption;
use crate::product::Product;

/// Read access to customer options by code.
pub trait CustomerOptionRepository: Send + Sync {
    fn find_one_by_code(&self, code: &str) -> DomainResult<Option<CustomerOption>>;

    fn find_all(&self) -> DomainResult<Vec<CustomerOption>>;
}

/// Read access to products by code.
pub trait ProductRepository: Send + Sync {
    /// Products whose code is in `codes`. Unknown codes are skipped.
    fn find_by_codes(&self, codes: &[String]) -> DomainResult<Vec<Product>>;

    fn find_all(&self) -> DomainResult<Vec<Product>>;
}

fn poisoned() -> DomainError {
    DomainError::invariant("repository lock poisoned")
}

/// In-memory option repository.
///
/// Intended for tests/dev and the command-line driver.
#[derive(Debug, Default)]
pub struct InMemoryCustomerOptionRepository {
    options: RwLock<BTreeMap<String, CustomerOption>>,
}

impl InMemoryCustomerOptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option; codes are unique.
    pub fn add(&self, option: CustomerOption) -> DomainResult<()> {
        let mut options = self.options.write().map_err(|_| poisoned())?;
        if options.contains_key(&option.code) {
            return Err(DomainError::conflict(format!(
                "customer option '{}' already exists",
                option.code
            )));
        }
        options.insert(option.code.clone(), option);
        Ok(())
    }
}

impl CustomerOptionRepository for InMemoryCustomerOptionRepository {
    fn find_one_by_code(&self, code: &str) -> DomainResult<Option<CustomerOption>> {
        let options = self.options.read().map_err(|_| poisoned())?;
        Ok(options.get(code).cloned())
    }

    fn find_all(&self) -> DomainResult<Vec<CustomerOption>> {
        let options = self.options.read().map_err(|_| poisoned())?;
        Ok(options.values().cloned().collect())
    }
}

/// In-memory product repository.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product; a second product with the same code replaces it.
    pub fn add(&self, product: Product) -> DomainResult<()> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.code.clone(), product);
        Ok(())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_codes(&self, codes: &[String]) -> DomainResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(codes
            .iter()
            .filter_map(|code| products.get(code).cloned())
            .collect())
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::CustomerOptionType;
    use crate::translation::Translations;

    #[test]
    fn duplicate_option_code_is_a_conflict() {
        let repo = InMemoryCustomerOptionRepository::new();
        let option =
            CustomerOption::new("engraving", CustomerOptionType::Text, Translations::new());
        repo.add(option.clone()).unwrap();

        let err = repo.add(option).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn find_by_codes_keeps_request_order_and_skips_unknown() {
        let repo = InMemoryProductRepository::new();
        repo.add(Product::new("b", "B")).unwrap();
        repo.add(Product::new("a", "A")).unwrap();

        let found = repo
            .find_by_codes(&["b".to_string(), "zzz".to_string(), "a".to_string()])
            .unwrap();
        let codes: Vec<&str> = found.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["b", "a"]);
    }
}
