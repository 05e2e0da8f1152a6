//! Message types flowing into the search controller.

use crate::domain::Product;
use crate::gateway::wire::ProductsResponse;
use crate::gateway::NetworkError;

/// Requests sent from a [`SearchClient`](crate::controller::SearchClient) to
/// the controller task.
#[derive(Debug)]
pub enum SearchRequest {
    /// The user edited the search box. Buffered behind the debounce timer.
    SetQueryText { text: String },
    /// Fetch the next page and append it to the current list.
    LoadNextPage,
    /// A row scrolled into view. Triggers a prefetch when it is the last
    /// accumulated product.
    ItemVisible { product: Product },
}

/// Completion of a spawned gateway fetch, delivered back to the actor over
/// its internal channel.
///
/// `generation` is captured at issue time; the actor discards outcomes whose
/// generation no longer matches the current session.
#[derive(Debug)]
pub(crate) struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Option<ProductsResponse>, NetworkError>,
}
