//! Customer option catalog.
//!
//! Options (configurable product attributes), their priced values, groups that
//! attach options to products, and validator data. Everything here is pure
//! domain logic; lookups go through the repository traits.

pub mod factory;
pub mod group;
pub mod option;
pub mod price;
pub mod price_import;
pub mod product;
pub mod repository;
pub mod translation;
pub mod validator;
pub mod value;

pub use factory::{
    CustomerOptionConfig, CustomerOptionFactory, CustomerOptionGroupConfig,
    CustomerOptionGroupFactory, PriceConfig,
};
pub use group::CustomerOptionGroup;
pub use option::{CustomerOption, CustomerOptionType};
pub use price::{CustomerOptionValuePrice, OptionPricing};
pub use price_import::{PriceImportSummary, ProductPriceImporter};
pub use product::Product;
pub use repository::{
    CustomerOptionRepository, InMemoryCustomerOptionRepository, InMemoryProductRepository,
    ProductRepository,
};
pub use translation::Translations;
pub use validator::{Comparator, OptionRule, Validator};
pub use value::CustomerOptionValue;
