//! # REST API for Orders
//!
//! Order placement plus read access. The checks mirror the order form:
//! anything below one is rejected and the client must exist before the
//! service is called.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{info, warn};

use super::mappers::{OrderMapper, TableMapper};
use super::{error_response, service_error_response};
use crate::domain::TableView;
use crate::AppState;
use shared::PlaceOrderRequest;

/// Place an order: stock check, stock update, order row and bill
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> impl IntoResponse {
    info!("POST /api/orders - request: {:?}", request);

    if request.quantity <= 0 {
        warn!("Rejected order with quantity {}", request.quantity);
        return error_response(StatusCode::BAD_REQUEST, "Quantity must be greater than 0.");
    }

    if let Err(e) = state.client_service.find_client_by_id(request.client_id).await {
        return service_error_response("place order", e);
    }

    let order = OrderMapper::from_place_request(request);
    match state.order_service.insert_order(order).await {
        Ok(placed) => (StatusCode::CREATED, Json(OrderMapper::to_dto(placed))).into_response(),
        Err(e) => service_error_response("place order", e),
    }
}

pub async fn get_order(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/orders/{}", id);

    match state.order_service.find_order_by_id(id).await {
        Ok(order) => (StatusCode::OK, Json(OrderMapper::to_dto(order))).into_response(),
        Err(e) => service_error_response("get order", e),
    }
}

pub async fn list_orders(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/orders");

    let orders = state.order_service.find_all_orders().await;
    Json(OrderMapper::to_order_list_dto(orders))
}

pub async fn get_order_table(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/orders/table");

    let orders = state.order_service.find_all_orders().await;
    Json(TableMapper::to_dto(TableView::from_records(&orders)))
}
