//! # Best-Price Allocation
//!
//! Splits a requested amount across the order books of several exchanges,
//! best price first, without spending more than the user holds at any one
//! exchange.
//!
//! Every entry on the relevant side of every book becomes a [`Candidate`].
//! Candidates are stable-sorted by price (ties keep enumeration order:
//! exchange order, then entry order) and consumed greedily. Each fill is
//! bounded by three independent limits:
//!
//! - the entry's own amount
//! - the amount still requested
//! - what the exchange's remaining balance covers at the entry's price
//!
//! Fills are buffered. If the candidates run out before the request is
//! covered the buffer is dropped and [`DomainError::InsufficientBalance`]
//! is returned, so callers never see a partial plan.
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::domain::entities::{
//!     AvailableFunds, Exchange, Order, OrderBook,
//! };
//! use crypto_order_planner::domain::services::allocation::allocate;
//! use crypto_order_planner::domain::services::side_policy::SidePolicy;
//! use crypto_order_planner::domain::value_objects::{
//!     Balance, ExchangeId, OrderId, Price, Quantity,
//! };
//! use rust_decimal::Decimal;
//!
//! let ask = Order::new(
//!     OrderId::new_v4(),
//!     Quantity::new(Decimal::new(3, 0)).unwrap(),
//!     Price::new(Decimal::new(250, 0)).unwrap(),
//! ).unwrap();
//! let exchange = Exchange::new(
//!     ExchangeId::new("exchange-01"),
//!     AvailableFunds::new(Balance::zero(), Balance::new(Decimal::new(1000, 0)).unwrap()),
//!     OrderBook::new(Vec::new(), vec![ask.into()]),
//! );
//!
//! let plan = allocate(&SidePolicy::buy(), &[exchange], Decimal::new(2, 0)).unwrap();
//! assert_eq!(plan.total_price().unwrap(), Decimal::new(500, 0));
//! ```

use crate::domain::entities::{Exchange, Order, OrderPlan, PlannedOrder};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::side_policy::SidePolicy;
use crate::domain::value_objects::{CheckedArithmetic, ExchangeId, Quantity};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A book entry considered during one allocation.
///
/// Borrowed views into the snapshot; the balance it draws on lives in the
/// per-call balance map, keyed by `exchange_id`.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Exchange the entry belongs to.
    pub exchange_id: &'a ExchangeId,
    /// The resting order.
    pub order: &'a Order,
}

impl Candidate<'_> {
    /// Unit price of the underlying order.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.order.price().get()
    }
}

/// Builds the globally ranked candidate list for a side.
///
/// The sort is stable, so equal prices keep the order in which exchanges
/// and their entries were enumerated.
#[must_use]
pub fn ranked_candidates<'a>(policy: &SidePolicy, exchanges: &'a [Exchange]) -> Vec<Candidate<'a>> {
    let side = policy.book_side();
    let mut candidates: Vec<Candidate<'a>> = exchanges
        .iter()
        .flat_map(|exchange| {
            exchange
                .order_book()
                .side(side)
                .iter()
                .map(move |entry| Candidate {
                    exchange_id: exchange.id(),
                    order: entry.order(),
                })
        })
        .collect();

    let ordering = policy.ordering();
    candidates.sort_by(|a, b| ordering.compare(a.price(), b.price()));
    candidates
}

/// Plans `requested` units across `exchanges` for the given side.
///
/// # Errors
///
/// - `DomainError::InvalidRequest` if `requested` is not positive
/// - `DomainError::InsufficientBalance` if books and balances cannot cover it
/// - `DomainError::Arithmetic` if a conversion overflows
pub fn allocate(
    policy: &SidePolicy,
    exchanges: &[Exchange],
    requested: Decimal,
) -> DomainResult<OrderPlan> {
    if requested <= Decimal::ZERO {
        return Err(DomainError::invalid_request(format!(
            "amount must be greater than 0, got {requested}"
        )));
    }

    let mut balances: HashMap<&ExchangeId, Decimal> = exchanges
        .iter()
        .map(|exchange| {
            (
                exchange.id(),
                policy.balance(exchange.available_funds()).get(),
            )
        })
        .collect();

    let candidates = ranked_candidates(policy, exchanges);
    let mut remaining = requested;
    let mut planned = Vec::new();

    for candidate in &candidates {
        let Some(balance) = balances.get_mut(candidate.exchange_id) else {
            continue;
        };

        let price = candidate.price();
        let affordable = policy.balance_to_amount(*balance, price)?;
        let fillable = candidate
            .order
            .amount()
            .get()
            .min(remaining)
            .min(affordable);

        if fillable <= Decimal::ZERO {
            tracing::trace!(
                exchange = %candidate.exchange_id,
                order = %candidate.order.id(),
                "skipping candidate, exchange balance exhausted"
            );
            continue;
        }

        remaining = remaining.safe_sub(fillable)?;
        let consumed = policy.amount_to_balance(fillable, price)?;
        // A rounded quotient can overshoot the balance in the last digit.
        *balance = balance.safe_sub(consumed)?.max(Decimal::ZERO);

        planned.push(PlannedOrder::new(
            candidate.exchange_id.clone(),
            candidate.order.id(),
            policy.order_type(),
            Quantity::new(fillable)?,
            candidate.order.price(),
        )?);

        tracing::trace!(
            exchange = %candidate.exchange_id,
            order = %candidate.order.id(),
            amount = %fillable,
            price = %price,
            remaining = %remaining,
            "planned fill"
        );

        if remaining <= Decimal::ZERO {
            break;
        }
    }

    if remaining > Decimal::ZERO {
        return Err(DomainError::insufficient_balance(requested, remaining));
    }

    Ok(OrderPlan::new(policy.order_type(), planned))
}
