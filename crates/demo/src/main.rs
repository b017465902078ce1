use anyhow::Context;

use bookstore_demo::DemoConfig;
use bookstore_inventory::Store;
use bookstore_products::ConsoleNotifier;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("failed to read demo configuration")?;
    bookstore_observability::init_with(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!(?config, "starting bookstore demo");

    let mut store = Store::new(ConsoleNotifier::new());
    bookstore_demo::run(&config, &mut store);

    tracing::info!(remaining = store.len(), "bookstore demo finished");
    Ok(())
}
