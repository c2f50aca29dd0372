//! # Domain Module
//!
//! Business logic for the orders application: the persisted models, the
//! validators applied to clients, and one service per entity.
//!
//! ## Module Organization
//!
//! - **models**: `Client`, `Product`, `Order` and `Bill` with their field tables
//! - **validators**: email and age checks run before a client is written
//! - **client_service**: validated client CRUD
//! - **product_service**: unvalidated product CRUD
//! - **order_service**: order placement (stock check, stock update, order, bill)
//! - **bill_service**: read access to logged bills
//! - **table_view**: header/row rendering of any entity list
//!
//! ## Business Rules
//!
//! - A client needs a non-empty email and an age between 7 and 30 inclusive
//! - An order cannot request more than the product's current stock
//! - Every placed order gets exactly one bill for `quantity * price`
//! - Bills are never edited after creation

pub mod bill_service;
pub mod client_service;
pub mod error;
pub mod models;
pub mod order_service;
pub mod product_service;
pub mod table_view;
pub mod validators;

pub use bill_service::BillService;
pub use client_service::ClientService;
pub use error::ServiceError;
pub use order_service::{OrderMode, OrderService};
pub use product_service::ProductService;
pub use table_view::TableView;
pub use validators::{ClientAgeValidator, EmailValidator, ValidationError, Validator};
