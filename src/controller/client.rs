//! Client handle for the search controller.

use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::controller::messages::SearchRequest;
use crate::controller::state::ControllerSnapshot;
use crate::controller::SearchError;
use crate::domain::Product;

/// Cheap-to-clone handle for driving the search controller and observing its
/// state.
///
/// The write operations mirror what a search screen needs: edit the query,
/// request the next page, and report row visibility for prefetch. Reads go
/// through [`snapshot`](Self::snapshot) or the [`subscribe`](Self::subscribe)
/// watch channel.
///
/// The controller shuts down once every clone of this handle is dropped.
#[derive(Clone)]
pub struct SearchClient {
    sender: mpsc::Sender<SearchRequest>,
    snapshots: watch::Receiver<ControllerSnapshot>,
}

impl SearchClient {
    pub(crate) fn new(
        sender: mpsc::Sender<SearchRequest>,
        snapshots: watch::Receiver<ControllerSnapshot>,
    ) -> Self {
        Self { sender, snapshots }
    }

    /// Updates the query text. The search itself fires only after the
    /// debounce quiet period, so rapid edits collapse into one request.
    #[instrument(skip(self))]
    pub async fn set_query_text(&self, text: &str) -> Result<(), SearchError> {
        debug!("sending request");
        self.send(SearchRequest::SetQueryText {
            text: text.to_string(),
        })
        .await
    }

    /// Fetches the next page for the active query, appending to the list.
    /// Ignored by the controller while another fetch is in flight.
    #[instrument(skip(self))]
    pub async fn load_next_page(&self) -> Result<(), SearchError> {
        debug!("sending request");
        self.send(SearchRequest::LoadNextPage).await
    }

    /// Reports that a product row became visible. When it is the last
    /// accumulated product this prefetches the next page; otherwise it is a
    /// no-op.
    #[instrument(skip(self, product), fields(product = %product.id))]
    pub async fn notify_item_visible(&self, product: &Product) -> Result<(), SearchError> {
        debug!("sending request");
        self.send(SearchRequest::ItemVisible {
            product: product.clone(),
        })
        .await
    }

    /// The latest published controller state.
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A watch receiver that yields every published state change.
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.snapshots.clone()
    }

    async fn send(&self, request: SearchRequest) -> Result<(), SearchError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| SearchError::ControllerClosed)
    }
}
