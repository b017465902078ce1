//! Fulfillment services.
//!
//! Stateless dispatchers, one per capability. They only announce the action;
//! stock has already been adjusted by the time they run. Destinations are
//! passed through verbatim, empty strings included.

/// Physical delivery.
pub mod shipping {
    use crate::notification::{Notification, Notifier};
    use crate::product::Product;

    pub fn send<N: Notifier + ?Sized>(product: &Product, address: &str, notifier: &mut N) {
        tracing::info!(product_id = %product.id(), address, "shipping product");
        notifier.notify(Notification::Shipping {
            name: product.name().to_owned(),
            address: address.to_owned(),
        });
    }
}

/// Digital delivery.
pub mod email {
    use crate::notification::{Notification, Notifier};
    use crate::product::Product;

    pub fn send<N: Notifier + ?Sized>(product: &Product, email: &str, notifier: &mut N) {
        tracing::info!(product_id = %product.id(), email, "emailing product");
        notifier.notify(Notification::Emailing {
            name: product.name().to_owned(),
            email: email.to_owned(),
        });
    }
}
