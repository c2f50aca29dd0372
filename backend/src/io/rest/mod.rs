//! # REST API Interface Layer
//!
//! One handler module per entity. Handlers only translate: form-level checks
//! such as a positive order quantity live here, business rules stay in the
//! services.
//!
//! ## Error Translation
//!
//! | ServiceError      | Status |
//! |-------------------|--------|
//! | `NotFound`        | 404    |
//! | `InvalidArgument` | 400    |
//! | `StorageFailure`  | 500    |
//!
//! Every error body is `{ "error": "<message>" }`.

pub mod bill_apis;
pub mod client_apis;
pub mod mappers;
pub mod order_apis;
pub mod product_apis;

pub use bill_apis::*;
pub use client_apis::*;
pub use order_apis::*;
pub use product_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use shared::ErrorResponse;

use crate::domain::ServiceError;

pub(crate) fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        ServiceError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs `err` under `action` and renders it as a JSON error response
pub(crate) fn service_error_response(action: &str, err: ServiceError) -> Response {
    error!("Failed to {}: {}", action, err);
    error_response(status_for(&err), err.to_string())
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde::{de::DeserializeOwned, Serialize};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::storage::DbConnection;
    use crate::{create_router, AppState};

    pub async fn test_router_with(config: AppConfig) -> (Router, AppState) {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        let state = AppState::new(db, &config);
        (create_router(state.clone()), state)
    }

    pub async fn test_router() -> (Router, AppState) {
        test_router_with(AppConfig::default()).await
    }

    pub async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get_json<T: DeserializeOwned>(router: &Router, uri: &str) -> (StatusCode, T) {
        let (status, body) = send(router, Method::GET, uri, None).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        router: &Router,
        method: Method,
        uri: &str,
        payload: &B,
    ) -> (StatusCode, T) {
        let json = serde_json::to_string(payload).unwrap();
        let (status, body) = send(router, method, uri, Some(json)).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}
