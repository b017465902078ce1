//! Observable notifications and the sinks that receive them.
//!
//! Receipts, fulfillment actions and inventory listings are all plain text
//! lines. They are modeled as [`Notification`] values so that the same flow can
//! print to a console or be recorded for inspection.

use bookstore_core::{Price, ProductId};

/// A single observable line produced by the store or a fulfillment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Purchase receipt: quantity, product name and line total.
    Receipt {
        quantity: u32,
        name: String,
        total: Price,
    },
    /// Physical fulfillment.
    Shipping { name: String, address: String },
    /// Digital fulfillment.
    Emailing { name: String, email: String },
    /// Heading that precedes an inventory listing.
    InventoryHeader,
    /// One inventory entry.
    InventoryLine {
        id: ProductId,
        name: String,
        price: Price,
    },
    /// Free-form text (section headings, driver messages).
    Note(String),
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::Receipt { .. } => "receipt",
            Notification::Shipping { .. } => "shipping",
            Notification::Emailing { .. } => "emailing",
            Notification::InventoryHeader => "inventory_header",
            Notification::InventoryLine { .. } => "inventory_line",
            Notification::Note(_) => "note",
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notification::Receipt {
                quantity,
                name,
                total,
            } => write!(f, "{quantity}x {name}     {total}"),
            Notification::Shipping { name, address } => write!(f, "Shipping {name} To {address}"),
            Notification::Emailing { name, email } => write!(f, "Emailing {name} To {email}"),
            Notification::InventoryHeader => f.write_str("** Inventory **"),
            Notification::InventoryLine { id, name, price } => {
                write!(f, "{id} - {name} - {price}")
            }
            Notification::Note(text) => f.write_str(text),
        }
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Prints every notification as one line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(kind = notification.kind(), "notification emitted");
        println!("{notification}");
    }
}

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Rendered lines, as a console sink would have printed them.
    pub fn lines(&self) -> Vec<String> {
        self.notifications.iter().map(ToString::to_string).collect()
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<Notification> {
        core::mem::take(&mut self.notifications)
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(kind = notification.kind(), "notification recorded");
        self.notifications.push(notification);
    }
}
