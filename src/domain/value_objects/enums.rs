//! # Domain Enums
//!
//! - [`OrderType`] - Buy or Sell direction of a planned order
//! - [`BookSide`] - Which half of an order book is read
//!
//! Both implement `Display`, `FromStr` and the Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The string does not name a variant of the enum.
    #[error("invalid {0} value: '{1}'")]
    InvalidValue(&'static str, String),
}

/// Whether an order buys or sells the crypto asset.
///
/// # Examples
///
/// ```
/// use crypto_order_planner::domain::value_objects::OrderType;
///
/// let side: OrderType = "buy".parse().unwrap();
/// assert_eq!(side, OrderType::Buy);
/// assert_eq!(side.to_string(), "BUY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum OrderType {
    /// Acquire the asset, spending fiat.
    Buy = 0,
    /// Dispose of the asset, receiving fiat.
    Sell = 1,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ParseEnumError::InvalidValue("OrderType", s.to_string())),
        }
    }
}

/// One half of an order book.
///
/// Bids are resting buy interest (what a seller fills against); asks are
/// resting sell interest (what a buyer fills against).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookSide {
    /// Resting buy orders.
    Bids,
    /// Resting sell orders.
    Asks,
}

impl BookSide {
    /// The book side a given order type consumes.
    #[inline]
    #[must_use]
    pub const fn consumed_by(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Buy => Self::Asks,
            OrderType::Sell => Self::Bids,
        }
    }
}

impl fmt::Display for BookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bids => write!(f, "BIDS"),
            Self::Asks => write!(f, "ASKS"),
        }
    }
}

impl FromStr for BookSide {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BIDS" | "BID" => Ok(Self::Bids),
            "ASKS" | "ASK" => Ok(Self::Asks),
            _ => Err(ParseEnumError::InvalidValue("BookSide", s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod order_type {
        use super::*;

        #[test]
        fn parses_case_insensitively() {
            assert_eq!("buy".parse::<OrderType>().unwrap(), OrderType::Buy);
            assert_eq!("Sell".parse::<OrderType>().unwrap(), OrderType::Sell);
            assert_eq!(" SELL ".parse::<OrderType>().unwrap(), OrderType::Sell);
        }

        #[test]
        fn rejects_unknown_values() {
            let err = "hold".parse::<OrderType>().unwrap_err();
            assert_eq!(err.to_string(), "invalid OrderType value: 'hold'");
        }

        #[test]
        fn serializes_uppercase() {
            assert_eq!(serde_json::to_string(&OrderType::Buy).unwrap(), "\"BUY\"");
            let side: OrderType = serde_json::from_str("\"SELL\"").unwrap();
            assert_eq!(side, OrderType::Sell);
        }
    }

    mod book_side {
        use super::*;

        #[test]
        fn buyers_consume_asks_sellers_consume_bids() {
            assert_eq!(BookSide::consumed_by(OrderType::Buy), BookSide::Asks);
            assert_eq!(BookSide::consumed_by(OrderType::Sell), BookSide::Bids);
        }

        #[test]
        fn parses_singular_and_plural() {
            assert_eq!("ask".parse::<BookSide>().unwrap(), BookSide::Asks);
            assert_eq!("BIDS".parse::<BookSide>().unwrap(), BookSide::Bids);
            assert!("mid".parse::<BookSide>().is_err());
        }
    }
}
