//! # Side Policy
//!
//! The four asymmetries between buying and selling, bundled as one value
//! the allocation algorithm is parameterised by.
//!
//! | Aspect | Buy | Sell |
//! |---|---|---|
//! | Balance consumed | euro | crypto |
//! | Book side scanned | asks | bids |
//! | Balance to amount | `balance / price` | `balance` |
//! | Amount to balance | `amount * price` | `amount` |
//! | Candidate order | cheapest first | highest first |
//!
//! # Examples
//!
//! ```
//! use crypto_order_planner::domain::services::side_policy::SidePolicy;
//! use crypto_order_planner::domain::value_objects::{BookSide, OrderType};
//! use rust_decimal::Decimal;
//!
//! let buy = SidePolicy::buy();
//! assert_eq!(buy.book_side(), BookSide::Asks);
//!
//! // 375 euro buys 1.5 units at 250
//! let amount = buy
//!     .balance_to_amount(Decimal::new(375, 0), Decimal::new(250, 0))
//!     .unwrap();
//! assert_eq!(amount, Decimal::new(15, 1));
//!
//! assert_eq!(SidePolicy::for_order_type(OrderType::Sell).order_type(), OrderType::Sell);
//! ```

use crate::domain::entities::AvailableFunds;
use crate::domain::value_objects::{
    ArithmeticResult, Balance, BookSide, CheckedArithmetic, OrderType,
};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// Direction candidates are ranked in, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceOrdering {
    /// Lowest price first.
    Ascending,
    /// Highest price first.
    Descending,
}

impl PriceOrdering {
    /// Compares two prices so that the better one sorts first.
    #[must_use]
    pub fn compare(self, a: Decimal, b: Decimal) -> Ordering {
        match self {
            Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }

    /// Returns true if `next` is no worse than `previous` in this ordering.
    #[must_use]
    pub fn is_non_worsening(self, previous: Decimal, next: Decimal) -> bool {
        self.compare(previous, next) != Ordering::Greater
    }
}

type BalanceAccessor = fn(&AvailableFunds) -> Balance;
type Conversion = fn(Decimal, Decimal) -> ArithmeticResult<Decimal>;

/// Buy/sell behaviour injected into the allocation algorithm.
#[derive(Clone, Copy)]
pub struct SidePolicy {
    order_type: OrderType,
    book_side: BookSide,
    ordering: PriceOrdering,
    balance: BalanceAccessor,
    balance_to_amount: Conversion,
    amount_to_balance: Conversion,
}

impl SidePolicy {
    /// Buying: spend euro against asks, cheapest first.
    #[must_use]
    pub fn buy() -> Self {
        Self {
            order_type: OrderType::Buy,
            book_side: BookSide::consumed_by(OrderType::Buy),
            ordering: PriceOrdering::Ascending,
            balance: AvailableFunds::euro,
            // No rounding to a tradable increment: the quotient keeps full precision.
            balance_to_amount: |balance, price| balance.safe_div(price),
            amount_to_balance: |amount, price| amount.safe_mul(price),
        }
    }

    /// Selling: spend crypto against bids, highest first.
    #[must_use]
    pub fn sell() -> Self {
        Self {
            order_type: OrderType::Sell,
            book_side: BookSide::consumed_by(OrderType::Sell),
            ordering: PriceOrdering::Descending,
            balance: AvailableFunds::crypto,
            balance_to_amount: |balance, _price| Ok(balance),
            amount_to_balance: |amount, _price| Ok(amount),
        }
    }

    /// The policy for a given order type.
    #[must_use]
    pub fn for_order_type(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Buy => Self::buy(),
            OrderType::Sell => Self::sell(),
        }
    }

    /// Tag carried by every planned order.
    #[inline]
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Which half of each order book is scanned.
    #[inline]
    #[must_use]
    pub fn book_side(&self) -> BookSide {
        self.book_side
    }

    /// Ranking of candidates.
    #[inline]
    #[must_use]
    pub fn ordering(&self) -> PriceOrdering {
        self.ordering
    }

    /// The balance this side consumes at an exchange.
    #[inline]
    #[must_use]
    pub fn balance(&self, funds: &AvailableFunds) -> Balance {
        (self.balance)(funds)
    }

    /// Largest asset amount a balance covers at `price`.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on division by zero or overflow.
    #[inline]
    pub fn balance_to_amount(&self, balance: Decimal, price: Decimal) -> ArithmeticResult<Decimal> {
        (self.balance_to_amount)(balance, price)
    }

    /// Balance consumed by trading `amount` at `price`.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    #[inline]
    pub fn amount_to_balance(&self, amount: Decimal, price: Decimal) -> ArithmeticResult<Decimal> {
        (self.amount_to_balance)(amount, price)
    }
}

impl fmt::Debug for SidePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidePolicy")
            .field("order_type", &self.order_type)
            .field("book_side", &self.book_side)
            .field("ordering", &self.ordering)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SidePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} against {}", self.order_type, self.book_side)
    }
}
