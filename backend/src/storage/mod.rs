//! # Storage Module
//!
//! Handles all data persistence for the orders application.
//!
//! ## Components
//!
//! - **connection.rs** - `DbConnection`, the connection provider handed to every store
//! - **entity.rs** - the `Entity` trait and the per-type field descriptor tables
//! - **store.rs** - `Store<T>`, generic CRUD over one table driven by those tables
//!
//! ## Error Policy
//!
//! The plain store operations swallow storage failures: they log a warning and
//! report an absent/empty result or a no-op. Callers that need to tell "no
//! row" from "query failed" use the `try_` operations, which return
//! [`StorageError`].

pub mod connection;
pub mod entity;
pub mod error;
pub mod store;

pub use connection::DbConnection;
pub use entity::{table_name_for, Entity, FieldDescriptor, FieldError, FieldRole, FieldValue};
pub use error::StorageError;
pub use store::Store;

use crate::domain::models::{Bill, Client, Order, Product};

pub type ClientStore = Store<Client>;
pub type ProductStore = Store<Product>;
pub type OrderStore = Store<Order>;
pub type BillStore = Store<Bill>;
