//! Error taxonomy for the network gateway.

use thiserror::Error;

/// Failures surfaced by a catalog fetch.
///
/// The taxonomy is deliberately coarse: the controller degrades every failure
/// to the same no-results presentation, so the gateway only distinguishes the
/// one status the upstream treats specially.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// The upstream rejected the request as unauthenticated (HTTP 401).
    #[error("authentication required")]
    Authentication,
    /// Transport failure, unexpected status code, or undecodable payload.
    #[error("unknown network failure")]
    Unknown,
}
