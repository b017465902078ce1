use bookstore_core::{CatalogError, CatalogResult, Entity, Price, ProductId};

use crate::fulfillment;
use crate::notification::Notifier;

/// Which optional fulfillment behaviors a product supports.
///
/// Fixed when the product is constructed; derived from its variant.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub shippable: bool,
    pub emailable: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        shippable: false,
        emailable: false,
    };
}

/// Variant-specific payload of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFormat {
    /// Printed copies; available while stock remains.
    Paper { stock: u32 },
    /// Unlimited copies delivered as a file (e.g. "PDF").
    Digital { file_format: String },
    /// Showcase copy; never for sale.
    Demo,
}

impl BookFormat {
    /// Remaining stock, for formats that track it.
    pub fn stock(&self) -> Option<u32> {
        match self {
            BookFormat::Paper { stock } => Some(*stock),
            BookFormat::Digital { .. } | BookFormat::Demo => None,
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            BookFormat::Paper { .. } => Capabilities {
                shippable: true,
                emailable: false,
            },
            BookFormat::Digital { .. } => Capabilities {
                shippable: false,
                emailable: true,
            },
            BookFormat::Demo => Capabilities::NONE,
        }
    }
}

/// Book refinement of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    isbn: ProductId,
    publish_year: i32,
    format: BookFormat,
}

impl Book {
    pub fn isbn(&self) -> &ProductId {
        &self.isbn
    }

    pub fn publish_year(&self) -> i32 {
        self.publish_year
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }
}

/// What kind of product this is. Every product in the catalog today is a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Book(Book),
}

/// Catalog entity: identity, name, price and variant behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    kind: ProductKind,
    capabilities: Capabilities,
}

impl Product {
    fn book(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        publish_year: i32,
        format: BookFormat,
    ) -> Self {
        let id = id.into();
        let capabilities = format.capabilities();
        Self {
            kind: ProductKind::Book(Book {
                isbn: id.clone(),
                publish_year,
                format,
            }),
            id,
            name: name.into(),
            price,
            capabilities,
        }
    }

    /// Physical book with `stock` printed copies. Shippable.
    pub fn paper_book(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        publish_year: i32,
        stock: u32,
    ) -> Self {
        Self::book(id, name, price, publish_year, BookFormat::Paper { stock })
    }

    /// Digital book delivered as `file_format`. Emailable.
    pub fn ebook(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        publish_year: i32,
        file_format: impl Into<String>,
    ) -> Self {
        Self::book(
            id,
            name,
            price,
            publish_year,
            BookFormat::Digital {
                file_format: file_format.into(),
            },
        )
    }

    /// Showcase book. Listed, never sold.
    pub fn demo_book(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        publish_year: i32,
    ) -> Self {
        Self::book(id, name, price, publish_year, BookFormat::Demo)
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn as_book(&self) -> Option<&Book> {
        match &self.kind {
            ProductKind::Book(book) => Some(book),
        }
    }

    /// Whether a purchase may be attempted. No side effects.
    pub fn is_available(&self) -> bool {
        match &self.kind {
            ProductKind::Book(book) => match &book.format {
                BookFormat::Paper { stock } => *stock > 0,
                BookFormat::Digital { .. } => true,
                BookFormat::Demo => false,
            },
        }
    }

    /// Whether this product can ever be sold, regardless of current stock.
    pub fn is_for_sale(&self) -> bool {
        match &self.kind {
            ProductKind::Book(book) => !matches!(book.format, BookFormat::Demo),
        }
    }

    /// Take `quantity` units out of stock.
    ///
    /// On error the product is left untouched.
    pub fn reduce_stock(&mut self, quantity: u32) -> CatalogResult<()> {
        match &mut self.kind {
            ProductKind::Book(book) => match &mut book.format {
                BookFormat::Paper { stock } => {
                    if quantity > *stock {
                        return Err(CatalogError::insufficient_stock(quantity, *stock));
                    }
                    *stock -= quantity;
                    Ok(())
                }
                BookFormat::Digital { .. } => Ok(()),
                BookFormat::Demo => Err(CatalogError::not_for_sale(self.id.clone())),
            },
        }
    }

    pub fn as_shippable(&self) -> Option<Shippable<'_>> {
        self.capabilities
            .shippable
            .then_some(Shippable { product: self })
    }

    pub fn as_emailable(&self) -> Option<Emailable<'_>> {
        self.capabilities
            .emailable
            .then_some(Emailable { product: self })
    }

    /// Run every fulfillment this product supports: shipping first, then email.
    pub fn fulfill<N: Notifier + ?Sized>(&self, address: &str, email: &str, notifier: &mut N) {
        if let Some(shippable) = self.as_shippable() {
            shippable.ship_to(address, notifier);
        }
        if let Some(emailable) = self.as_emailable() {
            emailable.send_to(email, notifier);
        }
    }

    #[cfg(test)]
    fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Handle proving a product supports physical delivery.
#[derive(Debug, Clone, Copy)]
pub struct Shippable<'a> {
    product: &'a Product,
}

impl Shippable<'_> {
    pub fn ship_to<N: Notifier + ?Sized>(&self, address: &str, notifier: &mut N) {
        fulfillment::shipping::send(self.product, address, notifier);
    }
}

/// Handle proving a product supports digital delivery.
#[derive(Debug, Clone, Copy)]
pub struct Emailable<'a> {
    product: &'a Product,
}

impl Emailable<'_> {
    pub fn send_to<N: Notifier + ?Sized>(&self, email: &str, notifier: &mut N) {
        fulfillment::email::send(self.product, email, notifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::RecordingNotifier;

    fn paper(stock: u32) -> Product {
        Product::paper_book("123", "Java 8 intro", Price::new(150), 2015, stock)
    }

    fn digital() -> Product {
        Product::ebook("456", "Angular Basics", Price::new(100), 2022, "PDF")
    }

    fn demo() -> Product {
        Product::demo_book("789", "Linux Introduction", Price::ZERO, 1999)
    }

    #[test]
    fn accessors_expose_common_fields() {
        let product = paper(5);
        assert_eq!(product.id().as_str(), "123");
        assert_eq!(product.name(), "Java 8 intro");
        assert_eq!(product.price(), Price::new(150));

        let book = product.as_book().unwrap();
        assert_eq!(book.publish_year(), 2015);
        assert_eq!(book.isbn(), product.id());
        assert_eq!(book.format().stock(), Some(5));
    }

    #[test]
    fn entity_identity_is_the_product_id() {
        fn key<E: Entity>(entity: &E) -> &E::Id {
            entity.id()
        }

        let product = digital();
        assert_eq!(key(&product), &ProductId::from("456"));
    }

    #[test]
    fn paper_book_reduces_stock_until_empty() {
        let mut product = paper(2);
        assert!(product.is_available());

        product.reduce_stock(2).unwrap();
        assert!(!product.is_available());
        assert_eq!(product.as_book().unwrap().format().stock(), Some(0));
    }

    #[test]
    fn paper_book_rejects_oversized_purchase() {
        let mut product = paper(5);
        let err = product.reduce_stock(6).unwrap_err();
        assert_eq!(err, CatalogError::insufficient_stock(6, 5));
        assert_eq!(product.as_book().unwrap().format().stock(), Some(5));
    }

    #[test]
    fn digital_book_is_unlimited() {
        let mut product = digital();
        let before = product.clone();
        product.reduce_stock(u32::MAX).unwrap();
        assert!(product.is_available());
        assert_eq!(product, before);
        assert_eq!(product.as_book().unwrap().format().stock(), None);
    }

    #[test]
    fn demo_book_is_never_for_sale() {
        let mut product = demo();
        assert!(!product.is_available());
        assert!(!product.is_for_sale());
        assert!(paper(0).is_for_sale());
        match product.reduce_stock(1).unwrap_err() {
            CatalogError::NotForSale(id) => assert_eq!(id.as_str(), "789"),
            other => panic!("Expected NotForSale, got {other:?}"),
        }
    }

    #[test]
    fn capabilities_follow_the_variant() {
        assert!(paper(1).as_shippable().is_some());
        assert!(paper(1).as_emailable().is_none());
        assert!(digital().as_shippable().is_none());
        assert!(digital().as_emailable().is_some());
        assert!(demo().as_shippable().is_none());
        assert!(demo().as_emailable().is_none());
        assert_eq!(demo().capabilities(), Capabilities::NONE);
    }

    #[test]
    fn capability_handles_dispatch_to_fulfillment() {
        let mut notifier = RecordingNotifier::new();
        let book = paper(1);
        let ebook = digital();

        book.as_shippable().unwrap().ship_to("Cairo, Egypt", &mut notifier);
        ebook.as_emailable().unwrap().send_to("user@mail.com", &mut notifier);

        assert_eq!(
            notifier.lines(),
            vec![
                "Shipping Java 8 intro To Cairo, Egypt",
                "Emailing Angular Basics To user@mail.com",
            ]
        );
    }

    #[test]
    fn fulfill_ships_before_emailing() {
        let bundle = paper(1).with_capabilities(Capabilities {
            shippable: true,
            emailable: true,
        });
        let mut notifier = RecordingNotifier::new();

        bundle.fulfill("Cairo, Egypt", "user@mail.com", &mut notifier);

        assert_eq!(
            notifier.lines(),
            vec![
                "Shipping Java 8 intro To Cairo, Egypt",
                "Emailing Java 8 intro To user@mail.com",
            ]
        );
    }

    #[test]
    fn fulfill_without_capabilities_emits_nothing() {
        let mut notifier = RecordingNotifier::new();

        demo().fulfill("Cairo, Egypt", "user@mail.com", &mut notifier);

        assert!(notifier.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: paper availability tracks stock, and reductions are exact.
            #[test]
            fn paper_stock_arithmetic(stock in 0u32..1_000, qty in 0u32..1_200) {
                let mut product = paper(stock);
                prop_assert_eq!(product.is_available(), stock > 0);

                let result = product.reduce_stock(qty);
                let remaining = product.as_book().unwrap().format().stock().unwrap();
                if qty > stock {
                    prop_assert_eq!(result, Err(CatalogError::insufficient_stock(qty, stock)));
                    prop_assert_eq!(remaining, stock);
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(remaining, stock - qty);
                }
                prop_assert_eq!(product.is_available(), remaining > 0);
            }

            /// Property: digital books never fail and never change.
            #[test]
            fn digital_is_a_no_op(qty in any::<u32>()) {
                let mut product = digital();
                let before = product.clone();
                prop_assert!(product.reduce_stock(qty).is_ok());
                prop_assert!(product.is_available());
                prop_assert_eq!(product, before);
            }

            /// Property: demo books always fail with NotForSale.
            #[test]
            fn demo_always_fails(qty in any::<u32>()) {
                let mut product = demo();
                prop_assert!(!product.is_available());
                prop_assert_eq!(
                    product.reduce_stock(qty),
                    Err(CatalogError::not_for_sale("789"))
                );
            }
        }
    }
}
