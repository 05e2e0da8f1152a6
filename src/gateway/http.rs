//! HTTP implementation of the product gateway.
//!
//! One request type, no retries, no caching. Status handling follows the
//! upstream contract: 204 is a success with no body, 401 is an authentication
//! failure, and everything else that is not decodable collapses into
//! [`NetworkError::Unknown`].

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ProductQuery;
use crate::gateway::wire::ProductsResponse;
use crate::gateway::{NetworkError, ProductGateway};

/// Fixed page size requested from the catalog endpoint.
pub const PAGE_SIZE: u32 = 40;

const DEFAULT_BASE_URL: &str = "https://shoppapp.liverpool.com.mx";
const CATALOG_PATH: &str = "/appclienteservices/services/v8/plp/sf";
const DEFAULT_SORT_OPTION: &str = "predefined";

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Origin of the catalog service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            user_agent: concat!("catalog-browse/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Errors raised while constructing the gateway.
#[derive(Debug, Error)]
pub enum GatewayBuildError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Production [`ProductGateway`] backed by reqwest.
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayBuildError> {
        let endpoint = Url::parse(&config.base_url)?.join(CATALOG_PATH)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ProductGateway for HttpGateway {
    async fn fetch_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Option<ProductsResponse>, NetworkError> {
        debug!(term = %query.search_term, page = query.page_number, "requesting catalog page");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request_params(query))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "transport failure");
                NetworkError::Unknown
            })?;

        let status = response.status();
        match classify_status(status) {
            StatusOutcome::NoContent => Ok(None),
            StatusOutcome::Reject(error) => {
                warn!(status = status.as_u16(), %error, "catalog request rejected");
                Err(error)
            }
            StatusOutcome::Decode => response.json::<ProductsResponse>().await.map(Some).map_err(
                |e| {
                    warn!(error = %e, "failed to decode catalog payload");
                    NetworkError::Unknown
                },
            ),
        }
    }
}

/// What to do with a response of the given status.
#[derive(Debug, PartialEq, Eq)]
enum StatusOutcome {
    /// Success with no body (HTTP 204).
    NoContent,
    /// Attempt to decode the JSON body.
    Decode,
    /// Fail with the given error kind.
    Reject(NetworkError),
}

/// Maps an HTTP status to the gateway outcome. 422 and all 2xx/3xx statuses
/// other than 204 proceed to decoding.
fn classify_status(status: StatusCode) -> StatusOutcome {
    match status.as_u16() {
        204 => StatusOutcome::NoContent,
        502 | 504 => StatusOutcome::Reject(NetworkError::Unknown),
        401 => StatusOutcome::Reject(NetworkError::Authentication),
        code if code >= 400 && code != 422 => StatusOutcome::Reject(NetworkError::Unknown),
        _ => StatusOutcome::Decode,
    }
}

fn request_params(query: &ProductQuery) -> Vec<(&'static str, String)> {
    let sort = query
        .sort_option
        .as_deref()
        .unwrap_or(DEFAULT_SORT_OPTION)
        .to_string();
    vec![
        ("page-number", query.page_number.to_string()),
        ("search-string", query.search_term.clone()),
        ("sort-option", sort),
        ("number-of-items-per-page", PAGE_SIZE.to_string()),
        ("force-plp", "false".to_string()),
        ("cleanProductName", "false".to_string()),
    ]
}
