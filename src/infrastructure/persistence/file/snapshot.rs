//! # Exchange Snapshot Format
//!
//! Serde shapes of the per-exchange JSON files and their conversion into
//! domain entities.
//!
//! Keys are PascalCase. Order fields other than `Id`, `Amount` and `Price`
//! (`Time`, `Type`, `Kind`, ...) are ignored.

use crate::domain::entities::{AvailableFunds, Exchange, Order, OrderBook, OrderBookEntry};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Balance, ExchangeId, OrderId, Price, Quantity};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// One exchange file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExchangeSnapshot {
    id: String,
    available_funds: AvailableFundsSnapshot,
    order_book: OrderBookSnapshot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AvailableFundsSnapshot {
    crypto: Decimal,
    euro: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OrderBookSnapshot {
    #[serde(default)]
    bids: Vec<OrderBookEntrySnapshot>,
    #[serde(default)]
    asks: Vec<OrderBookEntrySnapshot>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OrderBookEntrySnapshot {
    order: OrderSnapshot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OrderSnapshot {
    id: Uuid,
    amount: Decimal,
    price: Decimal,
}

impl ExchangeSnapshot {
    /// Identifier as written in the file.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Validates the snapshot and builds the domain exchange.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidExchangeId` for a blank exchange id
    /// - `DomainError::InvalidBalance` for a negative balance
    /// - `DomainError::InvalidQuantity` / `InvalidPrice` for a non-positive order
    pub fn into_exchange(self) -> DomainResult<Exchange> {
        let id = ExchangeId::parse(self.id)?;
        let funds = AvailableFunds::new(
            Balance::new(self.available_funds.crypto)?,
            Balance::new(self.available_funds.euro)?,
        );
        let bids = convert_side(self.order_book.bids)?;
        let asks = convert_side(self.order_book.asks)?;

        Ok(Exchange::new(
            id,
            funds,
            OrderBook::new(bids, asks),
        ))
    }
}

fn convert_side(entries: Vec<OrderBookEntrySnapshot>) -> DomainResult<Vec<OrderBookEntry>> {
    entries
        .into_iter()
        .map(|entry| {
            let order = entry.order;
            Order::new(
                OrderId::new(order.id),
                Quantity::new(order.amount)?,
                Price::new(order.price)?,
            )
            .map(OrderBookEntry::from)
        })
        .collect()
}
