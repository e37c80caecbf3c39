//! # Exchange
//!
//! A crypto exchange snapshot: the user's funds there and its order book.
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::domain::entities::{AvailableFunds, Exchange, OrderBook};
//! use crypto_order_planner::domain::value_objects::{Balance, ExchangeId};
//! use rust_decimal::Decimal;
//!
//! let exchange = Exchange::new(
//!     ExchangeId::new("exchange-01"),
//!     AvailableFunds::new(
//!         Balance::new(Decimal::new(108503, 4)).unwrap(),
//!         Balance::new(Decimal::new(11752012, 2)).unwrap(),
//!     ),
//!     OrderBook::default(),
//! );
//! assert_eq!(exchange.id().as_str(), "exchange-01");
//! ```

use crate::domain::entities::order_book::OrderBook;
use crate::domain::value_objects::{Balance, ExchangeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's available funds at an exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFunds {
    crypto: Balance,
    euro: Balance,
}

impl AvailableFunds {
    /// Creates a funds record.
    #[must_use]
    pub const fn new(crypto: Balance, euro: Balance) -> Self {
        Self { crypto, euro }
    }

    /// Crypto asset held.
    #[inline]
    #[must_use]
    pub const fn crypto(&self) -> Balance {
        self.crypto
    }

    /// Euro held.
    #[inline]
    #[must_use]
    pub const fn euro(&self) -> Balance {
        self.euro
    }
}

/// A single exchange: identity, funds and order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    id: ExchangeId,
    available_funds: AvailableFunds,
    order_book: OrderBook,
}

impl Exchange {
    /// Creates an exchange snapshot.
    #[must_use]
    pub fn new(id: ExchangeId, available_funds: AvailableFunds, order_book: OrderBook) -> Self {
        Self {
            id,
            available_funds,
            order_book,
        }
    }

    /// Returns the exchange identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ExchangeId {
        &self.id
    }

    /// Returns the funds held at this exchange.
    #[inline]
    #[must_use]
    pub fn available_funds(&self) -> &AvailableFunds {
        &self.available_funds
    }

    /// Returns the exchange's order book.
    #[inline]
    #[must_use]
    pub fn order_book(&self) -> &OrderBook {
        &self.order_book
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exchange({}, crypto={}, euro={}, bids={}, asks={})",
            self.id,
            self.available_funds.crypto,
            self.available_funds.euro,
            self.order_book.bids().len(),
            self.order_book.asks().len(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accessors_return_parts() {
        let funds = AvailableFunds::new(
            Balance::new(dec!(10)).unwrap(),
            Balance::new(dec!(1000)).unwrap(),
        );
        let exchange = Exchange::new(ExchangeId::new("ex"), funds, OrderBook::default());

        assert_eq!(exchange.available_funds().crypto().get(), dec!(10));
        assert_eq!(exchange.available_funds().euro().get(), dec!(1000));
        assert!(exchange.order_book().is_empty());
    }

    #[test]
    fn display_summarises() {
        let exchange = Exchange::new(
            ExchangeId::new("exchange-02"),
            AvailableFunds::default(),
            OrderBook::default(),
        );
        let display = exchange.to_string();
        assert!(display.contains("exchange-02"));
        assert!(display.contains("bids=0"));
    }
}
