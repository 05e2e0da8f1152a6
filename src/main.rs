//! Demo binary: searches the live catalog from the command line.
//!
//! ```bash
//! RUST_LOG=info cargo run -- tenis
//! ```

use catalog_browse::gateway::{GatewayConfig, HttpGateway};
use catalog_browse::lifecycle::{setup_tracing, BrowseSystem};
use catalog_browse::SearchState;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let term = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    info!(%term, "starting catalog browse");

    let gateway = HttpGateway::new(GatewayConfig::default()).map_err(|e| e.to_string())?;
    let system = BrowseSystem::start(gateway);
    let client = system.search_client.clone();

    if !term.is_empty() {
        client.set_query_text(&term).await.map_err(|e| e.to_string())?;
    }

    // Wait for the search for our term to reach a terminal state. The debounce
    // interval is part of the wait when a term was given.
    let mut snapshots = client.subscribe();
    let first_page = snapshots
        .wait_for(|s| s.query_text == term && s.search_state != SearchState::Loading)
        .await
        .map_err(|e| e.to_string())?
        .clone();

    match first_page.search_state {
        SearchState::Success => {
            info!(count = first_page.products.len(), "first page loaded");
            for product in &first_page.products {
                info!(
                    id = %product.id,
                    name = %product.display_name,
                    list = %product.display_list_price,
                    promo = %product.display_promo_price,
                    colors = product.colors.len(),
                    "product"
                );
            }
        }
        SearchState::NoResults => warn!("no results"),
        SearchState::Loading => {}
    }

    // One pagination step to show accumulation.
    if first_page.search_state == SearchState::Success && !first_page.products.is_empty() {
        snapshots.mark_unchanged();
        client.load_next_page().await.map_err(|e| e.to_string())?;
        snapshots.changed().await.map_err(|e| e.to_string())?;
        let paged = snapshots.borrow_and_update().clone();
        info!(total = paged.products.len(), "after loading the next page");
    }

    drop(client);
    drop(snapshots);
    system.shutdown().await?;

    info!("done");
    Ok(())
}
