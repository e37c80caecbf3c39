//! # Application Services
//!
//! - [`order_planner::OrderPlanner`]: buy/sell planning over an exchange
//!   data source

pub mod order_planner;

pub use order_planner::{AMOUNT_MUST_BE_POSITIVE, NOT_ENOUGH_FUNDS, OrderPlanner};
