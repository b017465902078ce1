use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use bookstore_core::{CatalogError, CatalogResult, Entity, Price, ProductId};
use bookstore_products::{Notification, Notifier, Product};

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub total: Price,
}

impl From<&Receipt> for Notification {
    fn from(receipt: &Receipt) -> Self {
        Notification::Receipt {
            quantity: receipt.quantity,
            name: receipt.name.clone(),
            total: receipt.total,
        }
    }
}

/// One entry of an inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl From<&Product> for InventoryLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_owned(),
            price: product.price(),
        }
    }
}

impl From<InventoryLine> for Notification {
    fn from(line: InventoryLine) -> Self {
        Notification::InventoryLine {
            id: line.id,
            name: line.name,
            price: line.price,
        }
    }
}

/// Lazy listing of the inventory, ordered by product id.
///
/// A clone continues independently from the clone's current position; call
/// [`Store::inventory`] again for a pass from the start.
#[derive(Debug, Clone)]
pub struct InventoryListing<'a> {
    products: btree_map::Values<'a, ProductId, Product>,
}

impl Iterator for InventoryListing<'_> {
    type Item = InventoryLine;

    fn next(&mut self) -> Option<Self::Item> {
        self.products.next().map(InventoryLine::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.products.size_hint()
    }
}

impl ExactSizeIterator for InventoryListing<'_> {}

/// Aggregate root: the store and its inventory.
///
/// Ids are unique keys; adding a product with an existing id replaces the
/// previous entry.
#[derive(Debug, Default)]
pub struct Store<N> {
    inventory: BTreeMap<<Product as Entity>::Id, Product>,
    notifier: N,
}

impl<N: Notifier> Store<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            inventory: BTreeMap::new(),
            notifier,
        }
    }

    /// Insert a product, replacing (and returning) any entry with the same id.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        let id = Entity::id(&product).clone();
        let replaced = self.inventory.insert(id.clone(), product);
        if replaced.is_some() {
            tracing::warn!(product_id = %id, "product overwritten");
        } else {
            tracing::info!(product_id = %id, "product added");
        }
        replaced
    }

    pub fn remove_product(&mut self, id: &str) -> Option<Product> {
        let removed = self.inventory.remove(id);
        if removed.is_some() {
            tracing::info!(product_id = id, "product removed");
        }
        removed
    }

    /// Drop every book published strictly before `threshold_year`.
    ///
    /// Returns how many entries were removed. Non-book products are kept.
    pub fn remove_outdated_books(&mut self, threshold_year: i32) -> usize {
        let before = self.inventory.len();
        self.inventory.retain(|_, product| {
            !product
                .as_book()
                .is_some_and(|book| book.publish_year() < threshold_year)
        });
        let removed = before - self.inventory.len();
        tracing::info!(threshold_year, removed, "outdated books removed");
        removed
    }

    /// Buy `quantity` units of product `id`.
    ///
    /// Stock is reduced and the receipt emitted before any fulfillment;
    /// shipping runs before emailing. An unavailable product that can never be
    /// sold is reported as `NotForSale`, otherwise as `ProductUnavailable`. On
    /// error nothing is mutated and nothing is emitted.
    pub fn buy_product(
        &mut self,
        id: &str,
        quantity: u32,
        address: &str,
        email: &str,
    ) -> CatalogResult<Receipt> {
        match self.purchase(id, quantity, address, email) {
            Ok(receipt) => {
                tracing::info!(
                    product_id = id,
                    quantity,
                    total = receipt.total.amount(),
                    "purchase completed"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(product_id = id, quantity, error = %err, "purchase rejected");
                Err(err)
            }
        }
    }

    fn purchase(
        &mut self,
        id: &str,
        quantity: u32,
        address: &str,
        email: &str,
    ) -> CatalogResult<Receipt> {
        let product = self
            .inventory
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found(id))?;

        if !product.is_available() {
            let id = product.id().clone();
            return Err(if product.is_for_sale() {
                CatalogError::unavailable(id)
            } else {
                CatalogError::not_for_sale(id)
            });
        }

        let total = product.price().total_for(quantity)?;
        product.reduce_stock(quantity)?;

        let receipt = Receipt {
            product_id: product.id().clone(),
            name: product.name().to_owned(),
            quantity,
            total,
        };
        self.notifier.notify(Notification::from(&receipt));

        product.fulfill(address, email, &mut self.notifier);

        Ok(receipt)
    }

    pub fn inventory(&self) -> InventoryListing<'_> {
        InventoryListing {
            products: self.inventory.values(),
        }
    }

    /// Emit the inventory header followed by one line per product.
    pub fn print_inventory(&mut self) {
        self.notifier.notify(Notification::InventoryHeader);
        for product in self.inventory.values() {
            self.notifier
                .notify(Notification::from(InventoryLine::from(product)));
        }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.inventory.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inventory.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }
}
