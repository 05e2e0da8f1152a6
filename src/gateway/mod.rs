//! # Network Gateway
//!
//! The single remote collaborator of this crate: one GET request against the
//! catalog search endpoint, with transport and status outcomes mapped into a
//! two-kind error taxonomy.
//!
//! The controller depends on the [`ProductGateway`] trait rather than on the
//! HTTP implementation, so tests substitute a scripted double without touching
//! the network. See `tests/search_controller_test.rs` for the pattern.

pub mod error;
pub mod http;
pub mod wire;

pub use error::NetworkError;
pub use http::{GatewayBuildError, GatewayConfig, HttpGateway};
pub use wire::{PlpResults, ProductRecord, ProductsResponse, VariantColor};

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::ProductQuery;

/// Capability to fetch one page of catalog records.
///
/// `Ok(None)` models an HTTP 204 response with no body. No retries and no
/// caching happen behind this seam; both error kinds are terminal for the
/// triggering fetch.
#[async_trait]
pub trait ProductGateway: Send + Sync + 'static {
    async fn fetch_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Option<ProductsResponse>, NetworkError>;
}

#[async_trait]
impl<G: ProductGateway> ProductGateway for Arc<G> {
    async fn fetch_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Option<ProductsResponse>, NetworkError> {
        self.as_ref().fetch_products(query).await
    }
}
