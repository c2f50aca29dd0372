//! # REST API for Bills
//!
//! Read-only: bills are created by order placement and never edited.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::mappers::{BillMapper, TableMapper};
use super::service_error_response;
use crate::domain::TableView;
use crate::AppState;

pub async fn get_bill(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/bills/{}", id);

    match state.bill_service.find_bill_by_id(id).await {
        Ok(bill) => (StatusCode::OK, Json(BillMapper::to_dto(&bill))).into_response(),
        Err(e) => service_error_response("get bill", e),
    }
}

pub async fn list_bills(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/bills");

    let bills = state.bill_service.find_all_bills().await;
    Json(BillMapper::to_bill_list_dto(&bills))
}

pub async fn get_bill_table(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/bills/table");

    let bills = state.bill_service.find_all_bills().await;
    Json(TableMapper::to_dto(TableView::from_records(&bills)))
}
