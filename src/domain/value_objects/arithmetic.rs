//! # Checked Arithmetic
//!
//! Exact decimal arithmetic that reports failure instead of panicking.
//!
//! Every amount, price and balance in the planner is a
//! [`rust_decimal::Decimal`]. The planner never rounds: `balance / price`
//! keeps whatever precision the division yields, so the only failures are
//! overflow and division by zero.
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let euro = Decimal::new(375, 0);
//! let price = Decimal::new(250, 0);
//! assert_eq!(euro.safe_div(price), Ok(Decimal::new(15, 1)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Safe arithmetic returning `Result` instead of panicking.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Sums an iterator of decimals with overflow checking.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the running total overflows.
pub fn checked_sum<I>(values: I) -> ArithmeticResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.safe_add(v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_formats_correctly() {
        assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(
            ArithmeticError::Underflow.to_string(),
            "arithmetic underflow"
        );
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "division by zero"
        );
    }

    #[test]
    fn safe_div_keeps_full_precision() {
        let amount = dec!(100).safe_div(dec!(3)).unwrap();
        assert_eq!(amount.safe_mul(dec!(3)).unwrap().round_dp(20), dec!(100));
        assert!(amount.scale() > 20);
    }

    #[test]
    fn safe_div_by_zero_fails() {
        assert_eq!(
            dec!(100).safe_div(Decimal::ZERO),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn safe_mul_overflow_fails() {
        assert_eq!(
            Decimal::MAX.safe_mul(dec!(2)),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn safe_sub_underflow_fails() {
        assert_eq!(
            Decimal::MIN.safe_sub(dec!(1)),
            Err(ArithmeticError::Underflow)
        );
    }

    #[test]
    fn checked_sum_adds_exactly() {
        let total = checked_sum([dec!(0.1), dec!(0.2), dec!(0.3)]).unwrap();
        assert_eq!(total, dec!(0.6));
    }

    #[test]
    fn checked_sum_of_nothing_is_zero() {
        assert_eq!(checked_sum(Vec::new()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn checked_sum_overflow_fails() {
        assert_eq!(
            checked_sum([Decimal::MAX, Decimal::MAX]),
            Err(ArithmeticError::Overflow)
        );
    }
}
