//! # Order Plan
//!
//! The output of one planning call: planned orders in the order they were
//! decided, with totals derived from them on demand.

use crate::domain::entities::planned_order::PlannedOrder;
use crate::domain::value_objects::{
    ArithmeticResult, CheckedArithmetic, ExchangeId, OrderType, checked_sum,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A set of planned orders which together fulfil a user's request.
///
/// Totals are recomputed from the planned orders every time, so they always
/// reconcile with the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlan {
    order_type: OrderType,
    planned_orders: Vec<PlannedOrder>,
}

impl OrderPlan {
    /// Creates a plan from planned orders in decision order.
    #[must_use]
    pub fn new(order_type: OrderType, planned_orders: Vec<PlannedOrder>) -> Self {
        Self {
            order_type,
            planned_orders,
        }
    }

    /// Whether this plan buys or sells.
    #[inline]
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// The planned orders, best price first.
    #[inline]
    #[must_use]
    pub fn planned_orders(&self) -> &[PlannedOrder] {
        &self.planned_orders
    }

    /// Number of planned orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planned_orders.len()
    }

    /// Returns true if the plan holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planned_orders.is_empty()
    }

    /// Total crypto amount across all planned orders.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum overflows.
    pub fn total_amount(&self) -> ArithmeticResult<Decimal> {
        checked_sum(self.planned_orders.iter().map(|o| o.amount().get()))
    }

    /// Total euro value (`sum(amount * price)`) across all planned orders.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if any product or the sum overflows.
    pub fn total_price(&self) -> ArithmeticResult<Decimal> {
        self.planned_orders
            .iter()
            .try_fold(Decimal::ZERO, |acc, o| acc.safe_add(o.notional()?))
    }

    /// Volume-weighted average unit price, `None` for an empty plan.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if a total overflows.
    pub fn average_price(&self) -> ArithmeticResult<Option<Decimal>> {
        let amount = self.total_amount()?;
        if amount.is_zero() {
            return Ok(None);
        }
        self.total_price()?.safe_div(amount).map(Some)
    }

    /// Distinct exchanges touched by the plan, in first-use order.
    #[must_use]
    pub fn exchange_ids(&self) -> Vec<&ExchangeId> {
        let mut ids: Vec<&ExchangeId> = Vec::new();
        for order in &self.planned_orders {
            let id = order.fulfilled_by_exchange_id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Consumes the plan, returning its planned orders.
    #[must_use]
    pub fn into_planned_orders(self) -> Vec<PlannedOrder> {
        self.planned_orders
    }
}
