//! Driver configuration: positional arguments, falling back to env vars.

use std::path::PathBuf;

use clap::Parser;

pub const CATALOG_ENV: &str = "CUSTOPT_CATALOG";
pub const CART_ENV: &str = "CUSTOPT_CART";

/// Recalculate customer option adjustments for a cart
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "custopt")]
#[command(version, about, long_about = None)]
pub struct AppConfig {
    /// Catalog JSON (products, customer options, groups, price imports)
    #[arg(value_name = "CATALOG_JSON", env = CATALOG_ENV)]
    pub catalog_path: PathBuf,

    /// Cart JSON (currency, channel, items with selections)
    #[arg(value_name = "CART_JSON", env = CART_ENV)]
    pub cart_path: PathBuf,
}
