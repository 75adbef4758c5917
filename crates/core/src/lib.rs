//! `custopt-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the customer option
//! catalog and the order model (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, OrderItemId, OrderItemUnitId};
pub use money::{BasisPoints, Money};
pub use value_object::ValueObject;
