//! Catalog error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Every variant is a caller-facing, locally unrecoverable condition. Nothing
/// is mutated and no fulfillment happens once one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A purchase referenced an id that is not in the inventory.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product exists but reports itself as unavailable.
    #[error("product is not available for sale: {0}")]
    ProductUnavailable(ProductId),

    /// A physical book was asked for more copies than it has.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Demo books can never be sold.
    #[error("demo books are not for sale: {0}")]
    NotForSale(ProductId),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A line total did not fit the price representation.
    #[error("price overflow")]
    PriceOverflow,
}

impl CatalogError {
    pub fn not_found(id: impl Into<ProductId>) -> Self {
        Self::ProductNotFound(id.into())
    }

    pub fn unavailable(id: impl Into<ProductId>) -> Self {
        Self::ProductUnavailable(id.into())
    }

    pub fn insufficient_stock(requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn not_for_sale(id: impl Into<ProductId>) -> Self {
        Self::NotForSale(id.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
