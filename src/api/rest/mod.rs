//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! ## Planning
//! - `GET /plan/buy?amount=<decimal>` - Plan a purchase
//! - `GET /plan/sell?amount=<decimal>` - Plan a sale
//!
//! Both answer `200` with the plan, `400` for a missing, unparsable or
//! non-positive amount, `422` when books and balances cannot cover the
//! amount and `500` when exchange data cannot be loaded.
//!
//! ## Health
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```no_run
//! use crypto_order_planner::api::rest::{AppState, bind, create_router};
//! use crypto_order_planner::infrastructure::persistence::FileExchangeRepository;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = Arc::new(FileExchangeRepository::open("data")?);
//! let router = create_router(AppState::new(repository));
//!
//! let listener = bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, ErrorResponse, HealthResponse, OrderPlanResponse, PlanParams, PlannedOrderResponse,
};
pub use routes::{bind, create_router};
