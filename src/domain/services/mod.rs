//! # Domain Services
//!
//! Planning logic that spans several exchanges and so belongs to no single
//! entity.
//!
//! ## Services
//!
//! - [`side_policy::SidePolicy`]: buy/sell asymmetries as one value
//! - [`allocation::allocate`]: greedy best-price allocation

pub mod allocation;
pub mod side_policy;

pub use allocation::{Candidate, allocate, ranked_candidates};
pub use side_policy::{PriceOrdering, SidePolicy};
