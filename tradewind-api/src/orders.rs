use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use tradewind_order::{OrderDetails, OrderRequest};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct PlaceOrderResponse {
    order_id: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/orders", post(place_order))
        .route("/v1/orders/{id}", get(get_order))
}

/// POST /v1/orders
/// Place an order: reduce stock, persist, attempt payment
async fn place_order(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>), AppError> {
    info!("Placing order request: {:?}", req);

    let order_id = state.orchestrator.place_order(&req).await?;

    Ok((StatusCode::CREATED, Json(PlaceOrderResponse { order_id })))
}

/// GET /v1/orders/{id}
/// Retrieve the composite order view
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderDetails>, AppError> {
    let details = state.orchestrator.get_order_details(order_id).await?;

    Ok(Json(details))
}
