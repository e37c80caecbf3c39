//! # REST Handlers
//!
//! Request handlers, shared state and wire DTOs.

use crate::application::error::{ApplicationError, ApplicationResult, InfrastructureError};
use crate::application::services::{NOT_ENOUGH_FUNDS, OrderPlanner};
use crate::domain::entities::{OrderPlan, PlannedOrder};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::OrderType;
use crate::infrastructure::persistence::ExchangeRepository;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Planner for `GET /plan/buy`.
    pub buy_planner: OrderPlanner,
    /// Planner for `GET /plan/sell`.
    pub sell_planner: OrderPlanner,
    /// Data source, for health reporting.
    pub repository: Arc<dyn ExchangeRepository>,
}

impl AppState {
    /// Builds buy and sell planners over one repository.
    #[must_use]
    pub fn new(repository: Arc<dyn ExchangeRepository>) -> Self {
        Self {
            buy_planner: OrderPlanner::buy(Arc::clone(&repository)),
            sell_planner: OrderPlanner::sell(Arc::clone(&repository)),
            repository,
        }
    }
}

/// Query string of the planning endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanParams {
    /// Crypto amount to buy or sell.
    pub amount: Decimal,
}

/// One planned order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedOrderResponse {
    /// Exchange to place the order on.
    pub fulfilled_by_exchange_id: String,
    /// Book entry the order fills against.
    pub fulfilled_by_order_id: Uuid,
    /// `BUY` or `SELL`.
    pub order_type: OrderType,
    /// Crypto amount.
    pub amount: Decimal,
    /// Euro unit price.
    pub price: Decimal,
}

impl From<&PlannedOrder> for PlannedOrderResponse {
    fn from(order: &PlannedOrder) -> Self {
        Self {
            fulfilled_by_exchange_id: order.fulfilled_by_exchange_id().to_string(),
            fulfilled_by_order_id: order.fulfilled_by_order_id().get(),
            order_type: order.order_type(),
            amount: order.amount().get(),
            price: order.price().get(),
        }
    }
}

/// An order plan on the wire, shared by the HTTP API and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlanResponse {
    /// `BUY` or `SELL`.
    pub order_type: OrderType,
    /// Sum of planned amounts.
    pub total_amount: Decimal,
    /// Sum of `amount * price`.
    pub total_price: Decimal,
    /// Planned orders, best price first.
    pub planned_orders: Vec<PlannedOrderResponse>,
}

impl TryFrom<&OrderPlan> for OrderPlanResponse {
    type Error = DomainError;

    fn try_from(plan: &OrderPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            order_type: plan.order_type(),
            total_amount: plan.total_amount()?,
            total_price: plan.total_price()?,
            planned_orders: plan
                .planned_orders()
                .iter()
                .map(PlannedOrderResponse::from)
                .collect(),
        })
    }
}

impl OrderPlanResponse {
    /// Renders a plan as indented JSON, as the CLI prints it.
    ///
    /// # Errors
    ///
    /// Returns a domain error if a total overflows and an infrastructure
    /// serialization error if encoding fails.
    pub fn to_pretty_json(plan: &OrderPlan) -> ApplicationResult<String> {
        let response = Self::try_from(plan)?;
        let json = serde_json::to_string_pretty(&response).map_err(InfrastructureError::from)?;
        Ok(json)
    }
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Health body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the data source answers.
    pub status: String,
    /// Number of known exchanges.
    pub exchanges: usize,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApplicationError::Domain(DomainError::InvalidRequest(message)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_REQUEST", message.clone()),
            ),
            ApplicationError::Domain(DomainError::InsufficientBalance { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("INSUFFICIENT_BALANCE", NOT_ENOUGH_FUNDS),
            ),
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", other.to_string()),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

async fn plan_with(
    planner: &OrderPlanner,
    params: Result<Query<PlanParams>, QueryRejection>,
) -> ApplicationResult<Json<OrderPlanResponse>> {
    let Query(params) =
        params.map_err(|rejection| ApplicationError::invalid_request(rejection.body_text()))?;

    // CPU-bound over large books.
    let planner = planner.clone();
    let plan = tokio::task::spawn_blocking(move || planner.plan(params.amount))
        .await
        .map_err(|e| ApplicationError::internal(format!("planning task failed: {e}")))??;

    let response = OrderPlanResponse::try_from(&plan)?;
    Ok(Json(response))
}

/// `GET /plan/buy?amount=`
pub async fn plan_buy(
    State(state): State<AppState>,
    params: Result<Query<PlanParams>, QueryRejection>,
) -> ApplicationResult<Json<OrderPlanResponse>> {
    plan_with(&state.buy_planner, params).await
}

/// `GET /plan/sell?amount=`
pub async fn plan_sell(
    State(state): State<AppState>,
    params: Result<Query<PlanParams>, QueryRejection>,
) -> ApplicationResult<Json<OrderPlanResponse>> {
    plan_with(&state.sell_planner, params).await
}

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health(State(state): State<AppState>) -> ApplicationResult<Json<HealthResponse>> {
    let exchanges = state.repository.count()?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        exchanges,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ExchangeId, OrderId, Price, Quantity};
    use rust_decimal_macros::dec;

    fn plan() -> OrderPlan {
        let order = PlannedOrder::new(
            ExchangeId::new("exchange-01"),
            OrderId::new(Uuid::nil()),
            OrderType::Buy,
            Quantity::new(dec!(1.5)).unwrap(),
            Price::new(dec!(250)).unwrap(),
        )
        .unwrap();
        OrderPlan::new(OrderType::Buy, vec![order])
    }

    #[test]
    fn plan_response_uses_camel_case_and_string_decimals() {
        let response = OrderPlanResponse::try_from(&plan()).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["orderType"], "BUY");
        assert_eq!(json["totalAmount"], "1.5");
        assert_eq!(json["totalPrice"], "375.0");
        let first = &json["plannedOrders"][0];
        assert_eq!(first["fulfilledByExchangeId"], "exchange-01");
        assert_eq!(
            first["fulfilledByOrderId"],
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(first["price"], "250");
    }

    #[test]
    fn pretty_json_is_indented_and_parses_back() {
        let json = OrderPlanResponse::to_pretty_json(&plan()).unwrap();
        assert!(json.contains("\n  \"totalAmount\": \"1.5\""));

        let parsed: OrderPlanResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, OrderPlanResponse::try_from(&plan()).unwrap());
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let invalid = ApplicationError::invalid_request("bad").into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let insufficient: ApplicationError =
            DomainError::insufficient_balance(dec!(2), dec!(1)).into();
        assert_eq!(
            insufficient.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let internal = ApplicationError::internal("boom").into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let encoding: ApplicationError = InfrastructureError::serialization("eof").into();
        assert_eq!(
            encoding.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
