//! Catalog loading: products, options and groups from one JSON document.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use custopt_core::{DomainError, DomainResult};
use custopt_options::{
    CustomerOption, CustomerOptionConfig, CustomerOptionFactory, CustomerOptionGroup,
    CustomerOptionGroupConfig, CustomerOptionGroupFactory, InMemoryCustomerOptionRepository,
    InMemoryProductRepository, PriceConfig, Product, ProductPriceImporter,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customer_options: Vec<CustomerOptionConfig>,
    #[serde(default)]
    pub customer_option_groups: Vec<CustomerOptionGroupConfig>,
    #[serde(default)]
    pub price_imports: Vec<PriceImportConfig>,
}

/// One price applied to a value for every listed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceImportConfig {
    pub customer_option: String,
    pub value: String,
    pub price: PriceConfig,
    pub products: Vec<String>,
}

/// Validated catalog.
#[derive(Debug)]
pub struct Catalog {
    groups: Vec<CustomerOptionGroup>,
}

impl Catalog {
    pub fn load(file: CatalogFile) -> DomainResult<Self> {
        let products = Arc::new(InMemoryProductRepository::new());
        for product in file.products {
            products.add(product)?;
        }

        let option_factory = CustomerOptionFactory::new();
        let mut built = file
            .customer_options
            .into_iter()
            .map(|config| option_factory.create_from_config(config))
            .collect::<DomainResult<Vec<_>>>()?;

        let importer = ProductPriceImporter::new(products.clone());
        for import in file.price_imports {
            let template = option_factory.create_price_from_config(import.price)?;
            let value = built
                .iter_mut()
                .find(|o| o.code == import.customer_option)
                .and_then(|o| o.value_by_code_mut(&import.value))
                .ok_or_else(|| {
                    DomainError::validation(format!(
                        "price import: unknown value '{}' of customer option '{}'",
                        import.value, import.customer_option
                    ))
                })?;
            importer.import(value, &template, &import.products)?;
        }

        let options = Arc::new(InMemoryCustomerOptionRepository::new());
        for option in built {
            options.add(option)?;
        }

        let group_factory = CustomerOptionGroupFactory::new(options, products);
        let groups = file
            .customer_option_groups
            .into_iter()
            .map(|config| group_factory.create_from_config(config))
            .collect::<DomainResult<Vec<_>>>()?;

        info!(groups = groups.len(), "catalog loaded");

        Ok(Self { groups })
    }

    /// Groups attached to `product_code`.
    pub fn groups_for_product<'a>(
        &'a self,
        product_code: &'a str,
    ) -> impl Iterator<Item = &'a CustomerOptionGroup> + 'a {
        self.groups.iter().filter(move |g| g.applies_to(product_code))
    }

    /// Option `option_code` as offered for `product_code`.
    pub fn offered_option<'a>(
        &'a self,
        product_code: &'a str,
        option_code: &str,
    ) -> Option<&'a CustomerOption> {
        self.groups_for_product(product_code)
            .find_map(|g| g.option(option_code))
    }

    /// Required options offered for `product_code`.
    pub fn required_options<'a>(
        &'a self,
        product_code: &'a str,
    ) -> impl Iterator<Item = &'a CustomerOption> + 'a {
        self.groups_for_product(product_code)
            .flat_map(|g| g.options.iter())
            .filter(|o| o.required)
    }
}
