//! Bulk price assignment: one value price for a list of products.

use std::sync::Arc;

use tracing::info;

use custopt_core::{DomainError, DomainResult};

use crate::price::CustomerOptionValuePrice;
use crate::repository::ProductRepository;
use crate::value::CustomerOptionValue;

/// Outcome of one import.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PriceImportSummary {
    pub created: usize,
    pub updated: usize,
}

/// Copies a price template onto a value once per product, scoping each copy
/// to that product. Existing prices of the same channel and product are
/// replaced.
#[derive(Clone)]
pub struct ProductPriceImporter {
    products: Arc<dyn ProductRepository>,
}

impl ProductPriceImporter {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// All product codes must exist; nothing is written otherwise.
    pub fn import(
        &self,
        value: &mut CustomerOptionValue,
        price: &CustomerOptionValuePrice,
        product_codes: &[String],
    ) -> DomainResult<PriceImportSummary> {
        let mut codes: Vec<&String> = Vec::with_capacity(product_codes.len());
        for code in product_codes {
            if code.trim().is_empty() {
                return Err(DomainError::validation("price import: blank product code"));
            }
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        if codes.is_empty() {
            return Err(DomainError::validation("price import: no products given"));
        }

        let found = self.products.find_by_codes(product_codes)?;
        let unknown = codes.iter().copied().find(|c| !found.iter().any(|p| p.code == **c));
        if let Some(missing) = unknown {
            return Err(DomainError::validation(format!(
                "price import: unknown product '{missing}'"
            )));
        }

        let mut summary = PriceImportSummary::default();
        for code in codes {
            if value.set_price(price.for_product(code.as_str())) {
                summary.updated += 1;
            } else {
                summary.created += 1;
            }
        }

        info!(
            value_code = %value.code,
            channel_code = ?price.channel_code,
            created = summary.created,
            updated = summary.updated,
            "customer option value prices imported"
        );

        Ok(summary)
    }
}

impl core::fmt::Debug for ProductPriceImporter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductPriceImporter").finish_non_exhaustive()
    }
}
