//! # REST Routes
//!
//! Router construction.

use crate::api::rest::handlers::{AppState, health, plan_buy, plan_sell};
use crate::application::error::{ApplicationResult, InfrastructureError};
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the planner router.
///
/// - `GET /plan/buy?amount=<decimal>`
/// - `GET /plan/sell?amount=<decimal>`
/// - `GET /health`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/plan/buy", get(plan_buy))
        .route("/plan/sell", get(plan_sell))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener the router is served on.
///
/// # Errors
///
/// Returns `InfrastructureError::Network` if the address cannot be bound.
pub async fn bind(address: &str) -> ApplicationResult<TcpListener> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| InfrastructureError::network(format!("cannot bind {address}: {e}")))?;
    Ok(listener)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::api::rest::handlers::{ErrorResponse, HealthResponse, OrderPlanResponse};
    use crate::domain::entities::{AvailableFunds, Exchange, Order, OrderBook};
    use crate::domain::value_objects::{Balance, ExchangeId, OrderId, OrderType, Price, Quantity};
    use crate::infrastructure::persistence::{
        ExchangeRepository, InMemoryExchangeRepository, RepositoryError, RepositoryResult,
    };
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn order(amount: Decimal, price: Decimal) -> Order {
        Order::new(
            OrderId::new_v4(),
            Quantity::new(amount).unwrap(),
            Price::new(price).unwrap(),
        )
        .unwrap()
    }

    fn router() -> Router {
        let repo = InMemoryExchangeRepository::with_exchanges([
            Exchange::new(
                ExchangeId::new("ex-1"),
                AvailableFunds::new(
                    Balance::new(dec!(10)).unwrap(),
                    Balance::new(dec!(375)).unwrap(),
                ),
                OrderBook::new(
                    vec![order(dec!(1), dec!(750)).into(), order(dec!(2), dec!(150)).into()],
                    vec![order(dec!(1), dec!(250)).into(), order(dec!(2), dec!(250)).into()],
                ),
            ),
            Exchange::new(
                ExchangeId::new("ex-2"),
                AvailableFunds::new(
                    Balance::new(dec!(2)).unwrap(),
                    Balance::new(dec!(10000)).unwrap(),
                ),
                OrderBook::new(
                    vec![order(dec!(3), dec!(500)).into()],
                    vec![order(dec!(3), dec!(500)).into()],
                ),
            ),
        ]);
        create_router(AppState::new(Arc::new(repo)))
    }

    async fn get_json<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    mod plan {
        use super::*;

        #[tokio::test]
        async fn buy_returns_plan() {
            let (status, body): (_, OrderPlanResponse) = get_json(router(), "/plan/buy?amount=4").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.order_type, OrderType::Buy);
            assert_eq!(body.total_amount, dec!(4));
            assert_eq!(body.total_price, dec!(1625));
            assert_eq!(body.planned_orders.len(), 3);
            assert_eq!(body.planned_orders[2].fulfilled_by_exchange_id, "ex-2");
        }

        #[tokio::test]
        async fn sell_returns_plan() {
            let (status, body): (_, OrderPlanResponse) =
                get_json(router(), "/plan/sell?amount=4").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.order_type, OrderType::Sell);
            let prices: Vec<Decimal> = body.planned_orders.iter().map(|o| o.price).collect();
            assert_eq!(prices, vec![dec!(750), dec!(500), dec!(150)]);
        }

        #[tokio::test]
        async fn fractional_amount_is_accepted() {
            let (status, body): (_, OrderPlanResponse) =
                get_json(router(), "/plan/buy?amount=0.25").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.total_amount, dec!(0.25));
        }
    }

    mod errors {
        use super::*;

        #[tokio::test]
        async fn zero_amount_is_bad_request() {
            let (status, body): (_, ErrorResponse) = get_json(router(), "/plan/buy?amount=0").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "INVALID_REQUEST");
            assert_eq!(body.message, "The amount must be greater than 0");
        }

        #[tokio::test]
        async fn negative_amount_is_bad_request() {
            let (status, body): (_, ErrorResponse) =
                get_json(router(), "/plan/sell?amount=-2").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "INVALID_REQUEST");
        }

        #[tokio::test]
        async fn missing_amount_is_bad_request() {
            let (status, body): (_, ErrorResponse) = get_json(router(), "/plan/buy").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "INVALID_REQUEST");
        }

        #[tokio::test]
        async fn unparsable_amount_is_bad_request() {
            let (status, body): (_, ErrorResponse) =
                get_json(router(), "/plan/buy?amount=lots").await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "INVALID_REQUEST");
        }

        #[tokio::test]
        async fn oversized_amount_is_unprocessable() {
            let (status, body): (_, ErrorResponse) =
                get_json(router(), "/plan/buy?amount=1000").await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body.code, "INSUFFICIENT_BALANCE");
            assert!(body.message.starts_with("You do not have enough funds"));
        }

        #[derive(Debug)]
        struct BrokenRepository;

        impl ExchangeRepository for BrokenRepository {
            fn exchanges(&self) -> RepositoryResult<Vec<Exchange>> {
                Err(RepositoryError::internal("disk on fire"))
            }
        }

        #[tokio::test]
        async fn data_source_failure_is_internal_error() {
            let app = create_router(AppState::new(Arc::new(BrokenRepository)));

            let (status, body): (_, ErrorResponse) = get_json(app, "/plan/buy?amount=1").await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.code, "INTERNAL_ERROR");
        }
    }

    #[tokio::test]
    async fn health_reports_exchange_count() {
        let (status, body): (_, HealthResponse) = get_json(router(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.exchanges, 2);
    }

    mod listener {
        use super::*;

        #[tokio::test]
        async fn occupied_port_is_a_retryable_network_error() {
            let taken = bind("127.0.0.1:0").await.unwrap();
            let address = taken.local_addr().unwrap().to_string();

            let err = bind(&address).await.unwrap_err();

            assert!(err.is_retryable());
            assert!(err.to_string().contains("network error"));
            assert!(err.to_string().contains(&address));
        }
    }
}
