//! # REST API for Client Management
//!
//! Endpoints for creating, retrieving, updating and deleting clients. Writes
//! go through the client validators; a rejected client is a 400.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::mappers::{ClientMapper, TableMapper};
use super::service_error_response;
use crate::domain::TableView;
use crate::AppState;
use shared::{CreateClientRequest, UpdateClientRequest};

/// Create a new client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> impl IntoResponse {
    info!("POST /api/clients - request: {:?}", request);

    let client = ClientMapper::from_create_request(request);
    match state.client_service.insert_client(client).await {
        Ok(created) => (StatusCode::CREATED, Json(ClientMapper::to_dto(created))).into_response(),
        Err(e) => service_error_response("create client", e),
    }
}

/// Get a client by ID
pub async fn get_client(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/clients/{}", id);

    match state.client_service.find_client_by_id(id).await {
        Ok(client) => (StatusCode::OK, Json(ClientMapper::to_dto(client))).into_response(),
        Err(e) => service_error_response("get client", e),
    }
}

/// List all clients
pub async fn list_clients(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/clients");

    let clients = state.client_service.find_all_clients().await;
    Json(ClientMapper::to_client_list_dto(clients))
}

pub async fn get_client_table(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/clients/table");

    let clients = state.client_service.find_all_clients().await;
    Json(TableMapper::to_dto(TableView::from_records(&clients)))
}

/// Replace a client's fields. The client must exist.
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateClientRequest>,
) -> impl IntoResponse {
    info!("PUT /api/clients/{} - request: {:?}", id, request);

    if let Err(e) = state.client_service.find_client_by_id(id).await {
        return service_error_response("update client", e);
    }

    let client = ClientMapper::from_update_request(id, request);
    match state.client_service.update_client(client).await {
        Ok(updated) => (StatusCode::OK, Json(ClientMapper::to_dto(updated))).into_response(),
        Err(e) => service_error_response("update client", e),
    }
}

/// Delete a client
pub async fn delete_client(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("DELETE /api/clients/{}", id);

    if let Err(e) = state.client_service.find_client_by_id(id).await {
        return service_error_response("delete client", e);
    }

    state.client_service.delete_client(id).await;
    StatusCode::NO_CONTENT.into_response()
}
