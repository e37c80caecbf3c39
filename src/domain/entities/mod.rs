//! # Domain Entities
//!
//! Read-only snapshot types consumed by the planner, and the plan it
//! produces.
//!
//! ## Inputs
//!
//! - [`Exchange`]: identity, [`AvailableFunds`] and [`OrderBook`]
//! - [`Order`] / [`OrderBookEntry`]: a resting bid or ask
//!
//! ## Outputs
//!
//! - [`PlannedOrder`]: one fill against one book entry
//! - [`OrderPlan`]: the ordered list of fills with derived totals

pub mod exchange;
pub mod order;
pub mod order_book;
pub mod order_plan;
pub mod planned_order;

pub use exchange::{AvailableFunds, Exchange};
pub use order::{Order, OrderBookEntry};
pub use order_book::OrderBook;
pub use order_plan::OrderPlan;
pub use planned_order::PlannedOrder;
