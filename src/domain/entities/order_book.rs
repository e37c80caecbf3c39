//! # Order Book
//!
//! The bids and asks of one exchange, as delivered by the data source.

use crate::domain::entities::order::OrderBookEntry;
use crate::domain::value_objects::BookSide;
use serde::{Deserialize, Serialize};

/// An exchange's order book.
///
/// Entry order within each side is whatever the data source delivered; the
/// planner sorts candidates itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    bids: Vec<OrderBookEntry>,
    asks: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Creates an order book from its two sides.
    #[must_use]
    pub fn new(bids: Vec<OrderBookEntry>, asks: Vec<OrderBookEntry>) -> Self {
        Self { bids, asks }
    }

    /// Resting buy interest.
    #[inline]
    #[must_use]
    pub fn bids(&self) -> &[OrderBookEntry] {
        &self.bids
    }

    /// Resting sell interest.
    #[inline]
    #[must_use]
    pub fn asks(&self) -> &[OrderBookEntry] {
        &self.asks
    }

    /// Returns the entries on the given side.
    #[must_use]
    pub fn side(&self, side: BookSide) -> &[OrderBookEntry] {
        match side {
            BookSide::Bids => &self.bids,
            BookSide::Asks => &self.asks,
        }
    }

    /// Returns true if neither side has any entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::order::Order;
    use crate::domain::value_objects::{OrderId, Price, Quantity};
    use rust_decimal_macros::dec;

    fn entry(price: rust_decimal::Decimal) -> OrderBookEntry {
        Order::new(
            OrderId::new_v4(),
            Quantity::new(dec!(1)).unwrap(),
            Price::new(price).unwrap(),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn side_selects_matching_entries() {
        let bid = entry(dec!(99));
        let ask = entry(dec!(101));
        let book = OrderBook::new(vec![bid.clone()], vec![ask.clone()]);

        assert_eq!(book.side(BookSide::Bids), &[bid]);
        assert_eq!(book.side(BookSide::Asks), &[ask]);
        assert!(!book.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(OrderBook::default().is_empty());
    }
}
