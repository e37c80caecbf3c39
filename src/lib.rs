//! # Crypto Order Planner
//!
//! Plans how to buy or sell a crypto amount across several exchanges at the
//! best achievable aggregate price.
//!
//! Every exchange contributes an order book and the user's balances there.
//! The planner merges all relevant book entries into one price-ranked
//! stream, consumes it greedily while respecting each exchange's balance,
//! and returns the resulting planned orders. It never returns a partial
//! plan: if the market cannot cover the whole amount the call fails.
//!
//! ## Layers
//!
//! - [`domain`]: value objects, entities, side policy and allocation
//! - [`application`]: the [`OrderPlanner`](application::services::OrderPlanner)
//!   use case and application errors
//! - [`infrastructure`]: exchange data sources, configuration, logging
//! - [`api`]: the HTTP interface
//!
//! ## Example
//!
//! ```
//! use crypto_order_planner::application::services::OrderPlanner;
//! use crypto_order_planner::domain::entities::{AvailableFunds, Exchange, Order, OrderBook};
//! use crypto_order_planner::domain::value_objects::{
//!     Balance, ExchangeId, OrderId, Price, Quantity,
//! };
//! use crypto_order_planner::infrastructure::persistence::InMemoryExchangeRepository;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let bid = Order::new(
//!     OrderId::new_v4(),
//!     Quantity::new(Decimal::new(3, 0)).unwrap(),
//!     Price::new(Decimal::new(250, 0)).unwrap(),
//! ).unwrap();
//! let exchange = Exchange::new(
//!     ExchangeId::new("exchange-01"),
//!     AvailableFunds::new(Balance::new(Decimal::TEN).unwrap(), Balance::zero()),
//!     OrderBook::new(vec![bid.into()], Vec::new()),
//! );
//!
//! let repository = Arc::new(InMemoryExchangeRepository::with_exchanges([exchange]));
//! let plan = OrderPlanner::sell(repository).plan(Decimal::TWO).unwrap();
//! assert_eq!(plan.total_price().unwrap(), Decimal::new(500, 0));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
