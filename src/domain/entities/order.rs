//! # Order
//!
//! A resting order read from an exchange's order book, and the book entry
//! that wraps it.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{OrderId, Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An order in an exchange's order book, bid or ask.
///
/// # Invariants
///
/// - `amount` is positive
/// - `price` is positive
///
/// # Examples
///
/// ```
/// use crypto_order_planner::domain::entities::Order;
/// use crypto_order_planner::domain::value_objects::{OrderId, Price, Quantity};
/// use rust_decimal::Decimal;
///
/// let order = Order::new(
///     OrderId::new_v4(),
///     Quantity::new(Decimal::new(3, 0)).unwrap(),
///     Price::new(Decimal::new(250, 0)).unwrap(),
/// ).unwrap();
/// assert_eq!(order.amount().get(), Decimal::new(3, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    amount: Quantity,
    price: Price,
}

impl Order {
    /// Creates an order with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the amount is not positive.
    /// Returns `DomainError::InvalidPrice` if the price is not positive.
    pub fn new(id: OrderId, amount: Quantity, price: Price) -> DomainResult<Self> {
        if !amount.is_positive() {
            return Err(DomainError::InvalidQuantity(format!(
                "order {id} amount must be positive"
            )));
        }
        if !price.is_positive() {
            return Err(DomainError::InvalidPrice(format!(
                "order {id} price must be positive"
            )));
        }
        Ok(Self { id, amount, price })
    }

    /// Returns the order identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the crypto amount offered.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Quantity {
        self.amount
    }

    /// Returns the euro unit price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order({} {}@{})", self.id, self.amount, self.price)
    }
}

/// An entry in an exchange's order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    order: Order,
}

impl OrderBookEntry {
    /// Wraps an order as a book entry.
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Returns the wrapped order.
    #[inline]
    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl From<Order> for OrderBookEntry {
    fn from(order: Order) -> Self {
        Self::new(order)
    }
}
