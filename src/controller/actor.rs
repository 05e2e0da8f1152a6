//! # Search Controller Actor
//!
//! The single owner of the browsing state. It runs as one Tokio task,
//! processing client requests sequentially, so the state needs no locking.
//! The gateway call is the only suspension point and runs in a spawned task;
//! its outcome comes back over an internal completion channel tagged with the
//! generation that issued it.
//!
//! **Debounce-and-search protocol**: every query-text update is buffered and
//! re-arms the quiet-period timer. When the timer fires, the buffered text
//! becomes the active term unless it matches the term that is already active.
//! Activation resets the session (page 1, empty list, `Loading`) before the
//! fetch starts, and bumps the generation so a late response for the previous
//! term can no longer corrupt the fresh session.

use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::controller::client::SearchClient;
use crate::controller::messages::{FetchOutcome, SearchRequest};
use crate::controller::state::{ControllerSnapshot, ControllerState};
use crate::domain::ProductQuery;
use crate::gateway::ProductGateway;

/// A query-text edit waiting out the quiet period.
#[derive(Debug)]
struct PendingSearch {
    text: String,
    deadline: Instant,
}

/// The server half of the search controller. Create it with
/// [`controller::new`](crate::controller::new), then spawn [`run`](Self::run)
/// with the gateway it should fetch through.
pub struct SearchActor {
    receiver: mpsc::Receiver<SearchRequest>,
    completion_tx: mpsc::Sender<FetchOutcome>,
    completions: mpsc::Receiver<FetchOutcome>,
    snapshots: watch::Sender<ControllerSnapshot>,
    state: ControllerState,
    debounce: Duration,
    pending: Option<PendingSearch>,
}

impl SearchActor {
    /// Creates an actor and its client handle.
    ///
    /// `debounce` is the quiet interval a query-text edit must survive before
    /// it triggers a search.
    pub fn new(buffer_size: usize, debounce: Duration) -> (Self, SearchClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_tx, completions) = mpsc::channel(buffer_size);
        let state = ControllerState::new();
        let (snapshots, snapshot_rx) = watch::channel(state.snapshot());

        let actor = Self {
            receiver,
            completion_tx,
            completions,
            snapshots,
            state,
            debounce,
            pending: None,
        };
        let client = SearchClient::new(sender, snapshot_rx);
        (actor, client)
    }

    /// Runs the controller loop until every client handle is dropped.
    ///
    /// On start the empty query is activated immediately, which loads the
    /// default catalog view. Outstanding fetches are discarded at teardown.
    pub async fn run<G: ProductGateway>(mut self, gateway: G) {
        let gateway = Arc::new(gateway);
        info!("search controller started");
        self.activate_search(String::new(), &gateway);

        loop {
            tokio::select! {
                request = self.receiver.recv() => match request {
                    Some(request) => self.handle_request(request, &gateway),
                    None => break,
                },
                Some(outcome) = self.completions.recv() => self.handle_completion(outcome),
                _ = quiet_period(self.pending.as_ref()) => self.on_quiet_period(&gateway),
            }
        }

        info!(products = self.state.products.len(), "search controller stopped");
    }

    fn handle_request<G: ProductGateway>(&mut self, request: SearchRequest, gateway: &Arc<G>) {
        match request {
            SearchRequest::SetQueryText { text } => {
                debug!(%text, "query text changed");
                self.pending = Some(PendingSearch {
                    text,
                    deadline: Instant::now() + self.debounce,
                });
            }
            SearchRequest::LoadNextPage => self.start_next_page(gateway),
            SearchRequest::ItemVisible { product } => {
                if self.state.products.last() == Some(&product) {
                    debug!(product = %product.id, "last item visible, prefetching next page");
                    self.start_next_page(gateway);
                }
            }
        }
    }

    /// The quiet period elapsed without further edits: the buffered text
    /// becomes the active term, unless it already is.
    fn on_quiet_period<G: ProductGateway>(&mut self, gateway: &Arc<G>) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.text == self.state.query.search_term {
            debug!(term = %pending.text, "unchanged search term suppressed");
            return;
        }
        self.activate_search(pending.text, gateway);
    }

    fn activate_search<G: ProductGateway>(&mut self, term: String, gateway: &Arc<G>) {
        let generation = self.state.begin_search(term);
        info!(term = %self.state.query.search_term, generation, "search activated");
        self.publish();
        self.spawn_fetch(generation, self.state.query.clone(), gateway);
    }

    fn start_next_page<G: ProductGateway>(&mut self, gateway: &Arc<G>) {
        if self.state.fetch_in_flight {
            debug!("fetch already in flight, ignoring page request");
            return;
        }
        let generation = self.state.begin_next_page();
        debug!(page = self.state.query.page_number, "loading next page");
        self.spawn_fetch(generation, self.state.query.clone(), gateway);
    }

    /// Issues the gateway call in its own task so the controller stays
    /// responsive while the request is outstanding.
    fn spawn_fetch<G: ProductGateway>(
        &self,
        generation: u64,
        query: ProductQuery,
        gateway: &Arc<G>,
    ) {
        let gateway = Arc::clone(gateway);
        let completions = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = gateway.fetch_products(&query).await;
            // The actor may already be gone at teardown; nothing to deliver then.
            let _ = completions.send(FetchOutcome { generation, result }).await;
        });
    }

    fn handle_completion(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.state.generation {
            debug!(
                stale = outcome.generation,
                current = self.state.generation,
                "discarding stale fetch response"
            );
            return;
        }

        match outcome.result {
            Ok(body) => {
                let page = catalog::to_products(body.as_ref());
                debug!(
                    count = page.len(),
                    page = self.state.query.page_number,
                    "page applied"
                );
                self.state.apply_fetch(Ok(page));
            }
            Err(error) => {
                warn!(%error, "catalog fetch failed");
                self.state.apply_fetch(Err(error));
            }
        }
        self.publish();
    }

    fn publish(&self) {
        // Receivers may all be gone; the state is still ours to keep.
        let _ = self.snapshots.send(self.state.snapshot());
    }
}

/// Resolves when the debounce deadline passes; never resolves while no edit
/// is buffered.
async fn quiet_period(pending: Option<&PendingSearch>) {
    match pending {
        Some(pending) => tokio::time::sleep_until(pending.deadline).await,
        None => future::pending::<()>().await,
    }
}
