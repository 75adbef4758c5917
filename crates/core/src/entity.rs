//! Entity trait: identity + continuity across state changes.

/// Entity with a stable identifier.
///
/// Order items and units are entities: two units of the same item may carry
/// identical adjustments and still be different units.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring state.
    fn has_same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
