//! `bookstore-core` — catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product model
//! and the store (no IO, no output).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use money::Price;
