//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. `Money` and `Adjustment` are value objects; an order item
/// or unit is an entity.
///
/// ```ignore
/// let a = Money::from_minor(250);
/// let b = Money::from_minor(250);
/// assert_eq!(a, b); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
