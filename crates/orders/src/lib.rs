//! Orders with customer option adjustments.
//!
//! The order aggregate (order → items → units → adjustments), the processor
//! pipeline that mutates it, and the customer option recalculator. All of it is
//! deterministic in-memory logic (no IO, no storage).

pub mod adjustment;
pub mod item_option;
pub mod order;
pub mod processor;
pub mod recalculator;

pub use adjustment::{Adjustment, AdjustmentFactory, DefaultAdjustmentFactory};
pub use item_option::{OrderItemOption, SelectedValue, SelectionContext};
pub use order::{Order, OrderItem, OrderItemUnit};
pub use processor::{AdjustmentsClearer, CompositeOrderProcessor, OrderProcessor};
pub use recalculator::{CUSTOMER_OPTION_ADJUSTMENT, CustomerOptionRecalculator};
