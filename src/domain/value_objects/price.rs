//! # Price
//!
//! Fiat (euro) unit price of one unit of the crypto asset.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative decimal unit price.
///
/// # Examples
///
/// ```
/// use crypto_order_planner::domain::value_objects::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(25000, 2)).unwrap();
/// assert!(price.is_positive());
/// assert!(Price::new(Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a price, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidPrice(format!(
                "price must not be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// A zero price.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Fiat value of `amount` units at this price.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    pub fn notional(&self, amount: Decimal) -> ArithmeticResult<Decimal> {
        self.0.safe_mul(amount)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
