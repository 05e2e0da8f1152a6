//! # catalog-browse
//!
//! The search-and-pagination core of a product-browsing screen: a debounced
//! search box, a paginated product list fetched from a remote catalog API,
//! and price/color display mapping.
//!
//! The crate separates concerns into four layers:
//!
//! 1. **[`gateway`]** - one HTTP GET against the catalog search endpoint,
//!    behind the [`ProductGateway`] trait so tests substitute a double.
//! 2. **[`catalog`]** - pure mapping from wire records to display products.
//! 3. **[`controller`]** - the state machine: debounced searches, page
//!    accumulation, prefetch, and stale-response rejection, owned by a single
//!    actor task.
//! 4. **[`lifecycle`]** - wiring, shutdown, and tracing setup.
//!
//! The presentation surface is out of scope; it consumes
//! [`ControllerSnapshot`](controller::ControllerSnapshot) values through the
//! client's watch channel and calls the three write operations.

pub mod catalog;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod lifecycle;

pub use controller::{SearchClient, SearchError};
pub use domain::{Product, ProductQuery, SearchState};
pub use gateway::{NetworkError, ProductGateway};
