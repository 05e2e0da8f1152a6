//! # Catalog Mapper
//!
//! Converts raw wire records into display-ready [`Product`](crate::domain::Product)
//! values. Pure functions only: deterministic given the input, no I/O.

pub mod currency;
pub mod mapper;

pub use currency::currency_formatted;
pub use mapper::to_products;
