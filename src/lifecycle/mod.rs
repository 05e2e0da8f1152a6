//! # System Lifecycle
//!
//! Wires the controller to a gateway, spawns the run loop, and coordinates a
//! clean shutdown. The controller ends when every client handle is dropped,
//! so shutdown is a matter of dropping handles and awaiting the task.

pub mod tracing;

pub use tracing::setup_tracing;

use tokio::task::JoinHandle;

use crate::controller::{self, SearchClient};
use crate::gateway::ProductGateway;

/// A running browse screen core: the controller task plus its client handle.
pub struct BrowseSystem {
    pub search_client: SearchClient,
    handle: JoinHandle<()>,
}

impl BrowseSystem {
    /// Starts the controller against the given gateway. The default catalog
    /// view (empty query, page 1) begins loading immediately.
    pub fn start<G: ProductGateway>(gateway: G) -> Self {
        let (actor, search_client) = controller::new();
        let handle = tokio::spawn(actor.run(gateway));
        Self {
            search_client,
            handle,
        }
    }

    /// Drops the system's client handle and waits for the controller to stop.
    ///
    /// Clones of the client handed out elsewhere keep the controller alive;
    /// drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.search_client);
        self.handle.await.map_err(|e| e.to_string())
    }
}
