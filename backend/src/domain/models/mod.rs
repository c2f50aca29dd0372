pub mod bill;
pub mod client;
pub mod order;
pub mod product;

pub use bill::Bill;
pub use client::Client;
pub use order::Order;
pub use product::Product;
