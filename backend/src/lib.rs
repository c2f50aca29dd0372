//! # Orders Backend
//!
//! Non-UI logic for the orders management application.
//!
//! The backend is layered:
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, validators, models)
//!     ↓
//! Storage Layer (generic stores over one SQLite connection)
//! ```
//!
//! `initialize_backend` wires the services onto one shared connection and
//! `create_router` exposes them under `/api`.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::domain::validators::client_validators;
use crate::domain::{BillService, ClientService, OrderService, ProductService};
use crate::storage::DbConnection;

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub client_service: ClientService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub bill_service: BillService,
}

impl AppState {
    /// Builds every service on top of one connection provider
    pub fn new(db: DbConnection, config: &AppConfig) -> Self {
        let validators = client_validators(config.client_min_age, config.client_max_age);

        Self {
            client_service: ClientService::with_validators(db.clone(), validators),
            product_service: ProductService::new(db.clone()),
            order_service: OrderService::with_mode(db.clone(), config.order_mode),
            bill_service: BillService::new(db),
        }
    }
}

/// Open the database and set up the domain services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!(
        "Setting up domain model (client age {}..={}, order mode {:?})",
        config.client_min_age, config.client_max_age, config.order_mode
    );
    Ok(AppState::new(db, config))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a frontend dev server to make requests
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:8080"))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/clients", get(io::list_clients).post(io::create_client))
        .route("/clients/table", get(io::get_client_table))
        .route(
            "/clients/:id",
            get(io::get_client).put(io::update_client).delete(io::delete_client),
        )
        .route("/products", get(io::list_products).post(io::create_product))
        .route("/products/table", get(io::get_product_table))
        .route(
            "/products/:id",
            get(io::get_product).put(io::update_product).delete(io::delete_product),
        )
        .route("/orders", get(io::list_orders).post(io::place_order))
        .route("/orders/table", get(io::get_order_table))
        .route("/orders/:id", get(io::get_order))
        .route("/bills", get(io::list_bills))
        .route("/bills/table", get(io::get_bill_table))
        .route("/bills/:id", get(io::get_bill));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
