use clap::Parser;

use custopt_cli::AppConfig;

fn main() -> anyhow::Result<()> {
    custopt_observability::init();

    let config = AppConfig::parse();
    tracing::info!(
        catalog = %config.catalog_path.display(),
        cart = %config.cart_path.display(),
        "processing cart"
    );

    let order = custopt_cli::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&order)?);

    Ok(())
}
