//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ExchangeId`]: string identifier of an exchange
//! - [`OrderId`]: UUID of an order book order
//!
//! ## Numeric Types
//!
//! - [`Price`]: euro unit price
//! - [`Quantity`]: crypto amount
//! - [`Balance`]: funds held at an exchange
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - [`OrderType`]: Buy or Sell
//! - [`BookSide`]: Bids or Asks

pub mod arithmetic;
pub mod balance;
pub mod enums;
pub mod ids;
pub mod price;
pub mod quantity;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, checked_sum};
pub use balance::Balance;
pub use enums::{BookSide, OrderType, ParseEnumError};
pub use ids::{ExchangeId, OrderId};
pub use price::Price;
pub use quantity::Quantity;
