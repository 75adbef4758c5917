//! `custopt` command-line driver.
//!
//! Loads a customer option catalog and a cart from JSON, builds the order,
//! runs the processor pipeline and renders the recalculated order.

pub mod cart;
pub mod catalog;
pub mod config;

use anyhow::Context;
use chrono::Utc;

use custopt_orders::{CompositeOrderProcessor, CustomerOptionRecalculator, Order, OrderProcessor};

pub use cart::CartFile;
pub use catalog::{Catalog, CatalogFile};
pub use config::AppConfig;

/// Pipeline used by the driver.
pub fn build_pipeline() -> CompositeOrderProcessor {
    CompositeOrderProcessor::new().with(
        "customer_option",
        0,
        CustomerOptionRecalculator::new(),
    )
}

/// Load both files, process the order and return it.
pub fn run(config: &AppConfig) -> anyhow::Result<Order> {
    let catalog_json = std::fs::read_to_string(&config.catalog_path)
        .with_context(|| format!("reading catalog {}", config.catalog_path.display()))?;
    let cart_json = std::fs::read_to_string(&config.cart_path)
        .with_context(|| format!("reading cart {}", config.cart_path.display()))?;

    process_json(&catalog_json, &cart_json)
}

/// Same as [`run`], from in-memory JSON documents.
pub fn process_json(catalog_json: &str, cart_json: &str) -> anyhow::Result<Order> {
    let catalog_file: CatalogFile =
        serde_json::from_str(catalog_json).context("parsing catalog JSON")?;
    let catalog = Catalog::load(catalog_file).context("building catalog")?;

    let cart_file: CartFile = serde_json::from_str(cart_json).context("parsing cart JSON")?;
    let mut order = cart_file.into_order(&catalog).context("building order")?;

    build_pipeline()
        .process(&mut order)
        .context("processing order")?;
    order.touch(Utc::now());

    Ok(order)
}
