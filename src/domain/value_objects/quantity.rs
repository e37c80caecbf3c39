//! # Quantity
//!
//! Amount of the crypto asset.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative decimal asset quantity.
///
/// # Examples
///
/// ```
/// use crypto_order_planner::domain::value_objects::Quantity;
/// use rust_decimal::Decimal;
///
/// let qty = Quantity::new(Decimal::new(405, 3)).unwrap();
/// assert_eq!(qty.get(), Decimal::new(405, 3));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    /// Creates a quantity, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidQuantity(format!(
                "quantity must not be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// A zero quantity.
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

    /// Returns true if the quantity is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the quantity is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two quantities.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` on overflow.
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    /// Returns the smaller of two quantities.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            Quantity::new(dec!(-1)),
            Err(DomainError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn zero_is_not_positive() {
        assert!(Quantity::zero().is_zero());
        assert!(!Quantity::zero().is_positive());
    }

    #[test]
    fn min_picks_smaller() {
        let a = Quantity::new(dec!(3)).unwrap();
        let b = Quantity::new(dec!(2.5)).unwrap();
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }

    #[test]
    fn safe_add_is_exact() {
        let a = Quantity::new(dec!(0.1)).unwrap();
        let b = Quantity::new(dec!(0.2)).unwrap();
        assert_eq!(a.safe_add(b).unwrap().get(), dec!(0.3));
    }

    #[test]
    fn serializes_as_string() {
        let qty = Quantity::new(dec!(0.405)).unwrap();
        assert_eq!(serde_json::to_string(&qty).unwrap(), "\"0.405\"");
    }
}
