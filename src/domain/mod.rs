//! # Domain Model
//!
//! Pure data types shared by the gateway, the catalog mapper, and the
//! search controller. Nothing in here performs I/O.

pub mod product;
pub mod query;

pub use product::{Product, SearchState};
pub use query::ProductQuery;
