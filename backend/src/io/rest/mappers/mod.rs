pub mod bill_mapper;
pub mod client_mapper;
pub mod order_mapper;
pub mod product_mapper;
pub mod table_mapper;

pub use bill_mapper::BillMapper;
pub use client_mapper::ClientMapper;
pub use order_mapper::OrderMapper;
pub use product_mapper::ProductMapper;
pub use table_mapper::TableMapper;
