//! # Search/Pagination Controller
//!
//! Owns the observable browsing state: the active query, the products
//! accumulated across pages, and the search state shown to the user. It is
//! implemented as an actor so a single task owns all mutation, with a
//! cloneable [`SearchClient`] as the interface.
//!
//! ## Structure
//!
//! - [`actor`] - the [`SearchActor`] run loop and the debounce protocol
//! - [`client`] - the [`SearchClient`] handle
//! - [`state`] - the state container and published [`ControllerSnapshot`]
//! - [`messages`] - request and completion message types
//! - [`error`] - [`SearchError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = controller::new();
//! tokio::spawn(actor.run(gateway));
//!
//! client.set_query_text("sneakers").await?;
//! let snapshot = client.snapshot();
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod messages;
pub mod state;

pub use actor::SearchActor;
pub use client::SearchClient;
pub use error::SearchError;
pub use messages::SearchRequest;
pub use state::ControllerSnapshot;

use std::time::Duration;

/// Quiet interval a query-text edit must survive before a search fires.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(1000);

const CHANNEL_CAPACITY: usize = 32;

/// Creates a search controller and its client with the default settings.
pub fn new() -> (SearchActor, SearchClient) {
    SearchActor::new(CHANNEL_CAPACITY, DEBOUNCE_INTERVAL)
}
