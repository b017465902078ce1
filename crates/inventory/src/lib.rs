//! Inventory domain module.
//!
//! This crate contains the [`Store`]: the keyed collection of products and the
//! purchase flow that ties availability, stock and fulfillment together. It is
//! single-threaded and in-memory; callers that share a store must wrap it in
//! their own lock.

pub mod store;

pub use store::{InventoryLine, InventoryListing, Receipt, Store};
