//! Unit prices and line totals.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Non-negative unit price in whole currency units.
///
/// No currency or tax is modeled; `Display` prints the bare amount.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Line total for `quantity` units at this price.
    pub fn total_for(self, quantity: u32) -> CatalogResult<Price> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Price)
            .ok_or(CatalogError::PriceOverflow)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
