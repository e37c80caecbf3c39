//! # Domain Errors
//!
//! Business rule violations raised by value objects, entities and the
//! allocation algorithm.
//!
//! Two variants matter to callers of the planner and must stay
//! distinguishable all the way out to exit codes and HTTP statuses:
//!
//! - [`DomainError::InvalidRequest`]: the requested amount is not positive
//! - [`DomainError::InsufficientBalance`]: the books and balances cannot
//!   cover the requested amount

use crate::domain::value_objects::arithmetic::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The planning request itself is invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The combined order books and balances cannot satisfy the request.
    #[error("insufficient balance: requested {requested}, {unfilled} could not be filled")]
    InsufficientBalance {
        /// Amount the caller asked for.
        requested: Decimal,
        /// Amount left over after every candidate was exhausted.
        unfilled: Decimal,
    },

    /// A quantity failed validation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A price failed validation.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A balance failed validation.
    #[error("invalid balance: {0}")]
    InvalidBalance(String),

    /// An exchange identifier failed validation.
    #[error("invalid exchange id: {0}")]
    InvalidExchangeId(String),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates an insufficient balance error.
    #[must_use]
    pub fn insufficient_balance(requested: Decimal, unfilled: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            unfilled,
        }
    }

    /// Returns true if the request was rejected before planning began.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Returns true if planning ran out of liquidity or balance.
    #[must_use]
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
