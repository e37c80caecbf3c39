//! # Order Planner
//!
//! Use case: plan how to buy or sell an amount across every known exchange.
//!
//! An [`OrderPlanner`] is bound to one side and one
//! [`ExchangeRepository`]. Each call to [`OrderPlanner::plan`] takes a fresh
//! snapshot from the repository and runs the best-price allocation over it.
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::application::services::order_planner::OrderPlanner;
//! use crypto_order_planner::infrastructure::persistence::InMemoryExchangeRepository;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let planner = OrderPlanner::buy(Arc::new(InMemoryExchangeRepository::new()));
//!
//! // Nothing to buy from
//! let err = planner.plan(Decimal::ONE).unwrap_err();
//! assert!(err.is_insufficient_balance());
//!
//! // Rejected before the repository is consulted
//! let err = planner.plan(Decimal::ZERO).unwrap_err();
//! assert!(err.is_invalid_request());
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::OrderPlan;
use crate::domain::services::allocation::allocate;
use crate::domain::services::side_policy::SidePolicy;
use crate::domain::value_objects::OrderType;
use crate::infrastructure::persistence::ExchangeRepository;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Message of the invalid request error for a non-positive amount.
pub const AMOUNT_MUST_BE_POSITIVE: &str = "The amount must be greater than 0";

/// User-facing explanation of an insufficient balance error.
pub const NOT_ENOUGH_FUNDS: &str =
    "You do not have enough funds or there are not enough available orders to complete this action";

/// Plans orders for one side against an exchange data source.
#[derive(Clone)]
pub struct OrderPlanner {
    policy: SidePolicy,
    repository: Arc<dyn ExchangeRepository>,
}

impl OrderPlanner {
    /// Creates a planner for `order_type`.
    #[must_use]
    pub fn new(order_type: OrderType, repository: Arc<dyn ExchangeRepository>) -> Self {
        Self {
            policy: SidePolicy::for_order_type(order_type),
            repository,
        }
    }

    /// Creates a buying planner.
    #[must_use]
    pub fn buy(repository: Arc<dyn ExchangeRepository>) -> Self {
        Self::new(OrderType::Buy, repository)
    }

    /// Creates a selling planner.
    #[must_use]
    pub fn sell(repository: Arc<dyn ExchangeRepository>) -> Self {
        Self::new(OrderType::Sell, repository)
    }

    /// The side this planner plans for.
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.policy.order_type()
    }

    /// The data source the planner reads.
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn ExchangeRepository> {
        &self.repository
    }

    /// Plans `amount` units at the best achievable aggregate price.
    ///
    /// # Errors
    ///
    /// - invalid request if `amount` is not positive; the repository is not
    ///   consulted
    /// - insufficient balance if books and balances cannot cover `amount`
    /// - repository error if exchange data cannot be loaded
    #[instrument(skip(self), fields(side = %self.policy.order_type()))]
    pub fn plan(&self, amount: Decimal) -> ApplicationResult<OrderPlan> {
        if amount <= Decimal::ZERO {
            debug!(%amount, "rejecting non-positive amount");
            return Err(ApplicationError::invalid_request(AMOUNT_MUST_BE_POSITIVE));
        }

        let exchanges = self.repository.exchanges()?;
        debug!(exchanges = exchanges.len(), "planning against snapshot");

        match allocate(&self.policy, &exchanges, amount) {
            Ok(plan) => {
                info!(
                    orders = plan.len(),
                    exchanges = plan.exchange_ids().len(),
                    "order plan ready"
                );
                Ok(plan)
            }
            Err(e) => {
                warn!(error = %e, "planning failed");
                Err(e.into())
            }
        }
    }
}

impl fmt::Debug for OrderPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderPlanner")
            .field("policy", &self.policy)
            .field("repository", &self.repository)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::{AvailableFunds, Exchange, Order, OrderBook};
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::{Balance, ExchangeId, OrderId, Price, Quantity};
    use crate::infrastructure::persistence::{
        InMemoryExchangeRepository, RepositoryError, RepositoryResult,
    };
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Repository that counts reads and can be told to fail.
    #[derive(Debug, Default)]
    struct CountingRepository {
        inner: InMemoryExchangeRepository,
        reads: AtomicUsize,
        fail: bool,
    }

    impl ExchangeRepository for CountingRepository {
        fn exchanges(&self) -> RepositoryResult<Vec<Exchange>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepositoryError::internal("data source offline"));
            }
            self.inner.exchanges()
        }
    }

    fn order(amount: Decimal, price: Decimal) -> Order {
        Order::new(
            OrderId::new_v4(),
            Quantity::new(amount).unwrap(),
            Price::new(price).unwrap(),
        )
        .unwrap()
    }

    fn market() -> InMemoryExchangeRepository {
        InMemoryExchangeRepository::with_exchanges([
            Exchange::new(
                ExchangeId::new("ex-1"),
                AvailableFunds::new(
                    Balance::new(dec!(10)).unwrap(),
                    Balance::new(dec!(10000)).unwrap(),
                ),
                OrderBook::new(
                    vec![order(dec!(3), dec!(250)).into(), order(dec!(3), dec!(750)).into()],
                    vec![order(dec!(3), dec!(250)).into(), order(dec!(3), dec!(750)).into()],
                ),
            ),
            Exchange::new(
                ExchangeId::new("ex-2"),
                AvailableFunds::new(
                    Balance::new(dec!(10)).unwrap(),
                    Balance::new(dec!(10000)).unwrap(),
                ),
                OrderBook::new(
                    vec![order(dec!(3), dec!(500)).into()],
                    vec![order(dec!(3), dec!(500)).into()],
                ),
            ),
        ])
    }

    #[test]
    fn buy_planner_takes_cheapest_asks() {
        let planner = OrderPlanner::buy(Arc::new(market()));

        let plan = planner.plan(dec!(4)).unwrap();

        assert_eq!(plan.order_type(), OrderType::Buy);
        assert_eq!(plan.total_amount().unwrap(), dec!(4));
        assert_eq!(plan.total_price().unwrap(), dec!(1250));
    }

    #[test]
    fn sell_planner_takes_highest_bids() {
        let planner = OrderPlanner::sell(Arc::new(market()));

        let plan = planner.plan(dec!(4)).unwrap();

        assert_eq!(plan.order_type(), OrderType::Sell);
        assert_eq!(plan.total_price().unwrap(), dec!(2750));
        assert_eq!(plan.planned_orders()[0].fulfilled_by_exchange_id().as_str(), "ex-1");
        assert_eq!(plan.planned_orders()[1].fulfilled_by_exchange_id().as_str(), "ex-2");
    }

    #[test]
    fn non_positive_amount_skips_repository() {
        let repo = Arc::new(CountingRepository::default());
        let planner = OrderPlanner::buy(repo.clone());

        for amount in [Decimal::ZERO, dec!(-1)] {
            let err = planner.plan(amount).unwrap_err();
            assert!(err.is_invalid_request());
            assert!(err.to_string().contains(AMOUNT_MUST_BE_POSITIVE));
        }
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn repository_failure_surfaces_as_data_source_error() {
        let repo = Arc::new(CountingRepository {
            fail: true,
            ..CountingRepository::default()
        });
        let planner = OrderPlanner::sell(repo);

        let err = planner.plan(dec!(1)).unwrap_err();
        assert!(err.is_data_source());
    }

    #[test]
    fn insufficient_liquidity_is_reported() {
        let planner = OrderPlanner::buy(Arc::new(market()));

        let err = planner.plan(dec!(100)).unwrap_err();

        assert!(err.is_insufficient_balance());
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InsufficientBalance { requested, .. })
                if requested == dec!(100)
        ));
    }

    #[test]
    fn each_call_reads_a_fresh_snapshot() {
        let repo = market();
        let planner = OrderPlanner::buy(Arc::new(repo.clone()));
        assert!(planner.plan(dec!(1)).is_ok());

        repo.clear();

        assert!(planner.plan(dec!(1)).unwrap_err().is_insufficient_balance());
    }

    #[test]
    fn planner_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<OrderPlanner>();

        let planner = OrderPlanner::buy(Arc::new(market()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let planner = planner.clone();
                std::thread::spawn(move || planner.plan(dec!(4)).unwrap().total_price().unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), dec!(1250));
        }
    }
}
