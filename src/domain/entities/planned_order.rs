//! # Planned Order
//!
//! One leg of an order plan: a fill against a specific book entry at a
//! specific exchange.
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::domain::entities::PlannedOrder;
//! use crypto_order_planner::domain::value_objects::{
//!     ExchangeId, OrderId, OrderType, Price, Quantity,
//! };
//! use rust_decimal::Decimal;
//!
//! let order = PlannedOrder::new(
//!     ExchangeId::new("exchange-01"),
//!     OrderId::new_v4(),
//!     OrderType::Buy,
//!     Quantity::new(Decimal::new(2, 0)).unwrap(),
//!     Price::new(Decimal::new(250, 0)).unwrap(),
//! ).unwrap();
//!
//! assert_eq!(order.notional().unwrap(), Decimal::new(500, 0));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    ArithmeticResult, ExchangeId, OrderId, OrderType, Price, Quantity,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An order the user should place to fulfil part of their request.
///
/// The exchange and order ids are references back into the snapshot that
/// produced the plan; they are only carried for traceability.
///
/// # Invariants
///
/// - `amount` is positive
/// - `price` is positive and equal to the source order's price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedOrder {
    fulfilled_by_exchange_id: ExchangeId,
    fulfilled_by_order_id: OrderId,
    order_type: OrderType,
    amount: Quantity,
    price: Price,
}

impl PlannedOrder {
    /// Creates a planned order with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the amount is not positive.
    /// Returns `DomainError::InvalidPrice` if the price is not positive.
    pub fn new(
        fulfilled_by_exchange_id: ExchangeId,
        fulfilled_by_order_id: OrderId,
        order_type: OrderType,
        amount: Quantity,
        price: Price,
    ) -> DomainResult<Self> {
        if !amount.is_positive() {
            return Err(DomainError::InvalidQuantity(
                "planned amount must be positive".to_string(),
            ));
        }
        if !price.is_positive() {
            return Err(DomainError::InvalidPrice(
                "planned price must be positive".to_string(),
            ));
        }
        Ok(Self {
            fulfilled_by_exchange_id,
            fulfilled_by_order_id,
            order_type,
            amount,
            price,
        })
    }

    /// The exchange the order should be placed on.
    #[inline]
    #[must_use]
    pub fn fulfilled_by_exchange_id(&self) -> &ExchangeId {
        &self.fulfilled_by_exchange_id
    }

    /// The book entry the order fills against.
    #[inline]
    #[must_use]
    pub fn fulfilled_by_order_id(&self) -> OrderId {
        self.fulfilled_by_order_id
    }

    /// Buy or sell.
    #[inline]
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Crypto amount to trade.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Quantity {
        self.amount
    }

    /// Euro unit price of the fill.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Euro value of this order (`amount * price`).
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    pub fn notional(&self) -> ArithmeticResult<Decimal> {
        self.price.notional(self.amount.get())
    }
}

impl fmt::Display for PlannedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlannedOrder({} {}@{} on {} against {})",
            self.order_type,
            self.amount,
            self.price,
            self.fulfilled_by_exchange_id,
            self.fulfilled_by_order_id,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make(amount: Decimal, price: Decimal) -> DomainResult<PlannedOrder> {
        PlannedOrder::new(
            ExchangeId::new("exchange-01"),
            OrderId::new_v4(),
            OrderType::Sell,
            Quantity::new(amount)?,
            Price::new(price)?,
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn new_creates_valid_order() {
            let order = make(dec!(2.5), dec!(500)).unwrap();
            assert_eq!(order.fulfilled_by_exchange_id().as_str(), "exchange-01");
            assert_eq!(order.order_type(), OrderType::Sell);
            assert_eq!(order.amount().get(), dec!(2.5));
            assert_eq!(order.price().get(), dec!(500));
        }

        #[test]
        fn new_fails_with_zero_amount() {
            assert!(matches!(
                make(dec!(0), dec!(500)),
                Err(DomainError::InvalidQuantity(_))
            ));
        }

        #[test]
        fn new_fails_with_zero_price() {
            assert!(matches!(
                make(dec!(1), dec!(0)),
                Err(DomainError::InvalidPrice(_))
            ));
        }
    }

    #[test]
    fn notional_value_computed() {
        let order = make(dec!(0.5), dec!(250)).unwrap();
        assert_eq!(order.notional().unwrap(), dec!(125));
    }

    #[test]
    fn display_format() {
        let order = make(dec!(1), dec!(250)).unwrap();
        let display = order.to_string();
        assert!(display.contains("SELL 1@250"));
        assert!(display.contains("exchange-01"));
    }

    #[test]
    fn serde_roundtrip() {
        let order = make(dec!(0.5), dec!(250)).unwrap();
        let json = serde_json::to_string(&order).unwrap();
        let back: PlannedOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
