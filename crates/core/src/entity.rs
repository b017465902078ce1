//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The identifier is fixed for the lifetime of the entity; only internal
/// state (e.g. stock) may change.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
