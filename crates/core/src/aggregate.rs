//! Aggregate root trait for in-memory domain models.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small: the order aggregate owns its nested entities
/// (items, units, adjustments) and is mutated in place by order processors.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per state-changing operation on the root.
    fn version(&self) -> u64;
}
