//! Error types for the search controller.

use thiserror::Error;

/// Errors surfaced by the [`SearchClient`](crate::controller::SearchClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The controller task has stopped and can no longer accept requests.
    #[error("search controller closed")]
    ControllerClosed,
}
