//! # REST API for Product Management
//!
//! Products are written as given: no field checks, negative price or stock
//! included.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use super::mappers::{ProductMapper, TableMapper};
use super::service_error_response;
use crate::domain::TableView;
use crate::AppState;
use shared::{CreateProductRequest, UpdateProductRequest};

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> impl IntoResponse {
    info!("POST /api/products - request: {:?}", request);

    let product = ProductMapper::from_create_request(request);
    let created = state.product_service.insert_product(product).await;
    (StatusCode::CREATED, Json(ProductMapper::to_dto(created)))
}

pub async fn get_product(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/products/{}", id);

    match state.product_service.find_product_by_id(id).await {
        Ok(product) => (StatusCode::OK, Json(ProductMapper::to_dto(product))).into_response(),
        Err(e) => service_error_response("get product", e),
    }
}

pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/products");

    let products = state.product_service.find_all_products().await;
    Json(ProductMapper::to_product_list_dto(products))
}

pub async fn get_product_table(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/products/table");

    let products = state.product_service.find_all_products().await;
    Json(TableMapper::to_dto(TableView::from_records(&products)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> impl IntoResponse {
    info!("PUT /api/products/{} - request: {:?}", id, request);

    if let Err(e) = state.product_service.find_product_by_id(id).await {
        return service_error_response("update product", e);
    }

    let product = ProductMapper::from_update_request(id, request);
    let updated = state.product_service.update_product(product).await;
    (StatusCode::OK, Json(ProductMapper::to_dto(updated))).into_response()
}

pub async fn delete_product(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("DELETE /api/products/{}", id);

    if let Err(e) = state.product_service.find_product_by_id(id).await {
        return service_error_response("delete product", e);
    }

    state.product_service.delete_product(id).await;
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::{Method, StatusCode};
    use shared::{
        CreateProductRequest, ErrorResponse, Product, ProductListResponse, TableResponse,
        UpdateProductRequest,
    };

    fn create_request(name: &str, price: f64, stock: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: "Office supplies".to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let (router, _) = test_router().await;

        let (status, created): (_, Product) = send_json(
            &router,
            Method::POST,
            "/api/products",
            &create_request("Pen", 2.5, 100),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.id, 1);

        let update = UpdateProductRequest {
            name: "Pen".to_string(),
            description: "Red ink".to_string(),
            price: 3.0,
            stock: 80,
        };
        let (status, updated): (_, Product) =
            send_json(&router, Method::PUT, "/api/products/1", &update).await;
        assert_eq!(status, StatusCode::OK);

        let (_, fetched): (_, Product) = get_json(&router, "/api/products/1").await;
        assert_eq!(fetched, updated);
        assert_eq!(fetched.stock, 80);

        let (status, _) = send(&router, Method::DELETE, "/api/products/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list): (_, ProductListResponse) = get_json(&router, "/api/products").await;
        assert!(list.products.is_empty());
    }

    #[tokio::test]
    async fn test_negative_values_are_accepted() {
        let (router, _) = test_router().await;

        let (status, created): (_, Product) = send_json(
            &router,
            Method::POST,
            "/api/products",
            &create_request("Refund", -5.0, -1),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!((created.price, created.stock), (-5.0, -1));
    }

    #[tokio::test]
    async fn test_missing_product() {
        let (router, _) = test_router().await;

        let (status, body): (_, ErrorResponse) = get_json(&router, "/api/products/3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "The product with id = 3 was not found!");

        let (status, _) = send(&router, Method::DELETE, "/api/products/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_table() {
        let (router, _) = test_router().await;
        let _: (_, Product) = send_json(
            &router,
            Method::POST,
            "/api/products",
            &create_request("Pen", 2.5, 100),
        )
        .await;

        let (_, table): (_, TableResponse) = get_json(&router, "/api/products/table").await;
        assert_eq!(table.headers, vec!["id", "name", "description", "price", "stock"]);
        assert_eq!(table.rows, vec![vec!["1", "Pen", "Office supplies", "2.5", "100"]]);
    }
}
