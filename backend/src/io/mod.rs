//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Requests are
//! decoded into shared DTOs, mapped onto domain models, and the results are
//! mapped back. Domain errors become HTTP status codes with a JSON body.
//!
//! ## Supported Operations
//!
//! - **/api/clients**: client CRUD plus a table rendering
//! - **/api/products**: product CRUD plus a table rendering
//! - **/api/orders**: order placement, lookup and table rendering
//! - **/api/bills**: bill lookup and table rendering

pub mod rest;

pub use rest::*;
