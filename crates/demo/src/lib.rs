//! Demonstration driver for the bookstore.
//!
//! Seeds the three reference books, lists them, buys each one, sweeps out old
//! titles and lists again. Everything is written through the store's notifier,
//! so the same run can target the console or a recording.

pub mod config;

use bookstore_core::Price;
use bookstore_inventory::Store;
use bookstore_products::{Notification, Notifier, Product};

pub use config::DemoConfig;

/// The catalog every demo run starts from.
pub fn reference_catalog() -> Vec<Product> {
    vec![
        Product::paper_book("123", "Java 8 intro", Price::new(150), 2015, 5),
        Product::ebook("456", "Angular Basics", Price::new(100), 2022, "PDF"),
        Product::demo_book("789", "Linux Introduction", Price::ZERO, 1999),
    ]
}

fn section<N: Notifier>(store: &mut Store<N>, heading: impl Into<String>) {
    let notifier = store.notifier_mut();
    notifier.notify(Notification::Note(String::new()));
    notifier.notify(Notification::Note(heading.into()));
}

fn buy<N: Notifier>(store: &mut Store<N>, id: &str, address: &str, email: &str) {
    if let Err(err) = store.buy_product(id, 1, address, email) {
        store
            .notifier_mut()
            .notify(Notification::Note(format!("Failed: {err}")));
    }
}

/// Run the scripted scenario against `store`.
///
/// Rejected purchases are reported and the script carries on.
pub fn run<N: Notifier>(config: &DemoConfig, store: &mut Store<N>) {
    for product in reference_catalog() {
        store.add_product(product);
    }

    store.print_inventory();

    section(store, "Buying Paper Book:");
    buy(store, "123", &config.ship_to, &config.email);

    section(store, "Buying EBook:");
    buy(store, "456", "", &config.email);

    section(store, "Buying Showcase Book:");
    buy(store, "789", "", &config.email);

    section(
        store,
        format!("Removing books older than year {}:", config.outdated_before),
    );
    let removed = store.remove_outdated_books(config.outdated_before);
    tracing::debug!(removed, "sweep finished");

    section(store, "Updated Inventory:");
    store.print_inventory();
}
