//! Products domain module.
//!
//! This crate contains the book catalog model: the shared product record, the
//! closed set of book variants, the optional fulfillment capabilities a variant
//! declares, and the fulfillment services that act on them. All behavior is
//! deterministic; observable output goes through a [`Notifier`].

pub mod fulfillment;
pub mod notification;
pub mod product;

pub use notification::{ConsoleNotifier, Notification, Notifier, RecordingNotifier};
pub use product::{Book, BookFormat, Capabilities, Emailable, Product, ProductKind, Shippable};
