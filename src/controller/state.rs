//! State owned by the search controller.

use crate::domain::{Product, ProductQuery, SearchState};
use crate::gateway::NetworkError;

/// Read-only view of the controller, published to observers after every
/// visible state change.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    /// The currently active search term.
    pub query_text: String,
    /// Products accumulated across the pages of the current session.
    pub products: Vec<Product>,
    pub search_state: SearchState,
}

/// The mutable controller state. Only the actor task touches this, so no
/// locking is needed.
///
/// Invariant: `products` only grows within one query session. A query-text
/// change clears it and bumps `generation`, which is what stale fetch
/// responses are checked against.
#[derive(Debug)]
pub(crate) struct ControllerState {
    pub query: ProductQuery,
    pub products: Vec<Product>,
    pub search_state: SearchState,
    pub generation: u64,
    pub fetch_in_flight: bool,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            query: ProductQuery::for_term(""),
            products: Vec::new(),
            search_state: SearchState::Loading,
            generation: 0,
            fetch_in_flight: false,
        }
    }

    /// Starts a new session for `term`: clears accumulated products, resets
    /// the page cursor, and invalidates every outstanding fetch. Returns the
    /// generation to attach to the session's first fetch.
    pub fn begin_search(&mut self, term: String) -> u64 {
        self.generation += 1;
        self.query = ProductQuery::for_term(term);
        self.products.clear();
        self.search_state = SearchState::Loading;
        self.fetch_in_flight = true;
        self.generation
    }

    /// Advances the page cursor for a pagination fetch within the current
    /// session. Returns the generation to attach to it.
    pub fn begin_next_page(&mut self) -> u64 {
        self.query.advance();
        self.fetch_in_flight = true;
        self.generation
    }

    /// Applies a completed fetch for the current generation. A successful
    /// page is appended even when empty; a failure leaves the accumulated
    /// products untouched.
    pub fn apply_fetch(&mut self, result: Result<Vec<Product>, NetworkError>) {
        self.fetch_in_flight = false;
        match result {
            Ok(page) => {
                self.products.extend(page);
                self.search_state = SearchState::Success;
            }
            Err(_) => {
                self.search_state = SearchState::NoResults;
            }
        }
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            query_text: self.query.search_term.clone(),
            products: self.products.clone(),
            search_state: self.search_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            display_name: id.to_string(),
            brand: None,
            display_list_price: "$1.00".to_string(),
            display_promo_price: "$1.00".to_string(),
            image_url: None,
            colors: Vec::new(),
        }
    }

    #[test]
    fn begin_search_resets_the_session() {
        let mut state = ControllerState::new();
        state.products.push(product("p1"));
        state.search_state = SearchState::Success;

        let generation = state.begin_search("shoes".to_string());

        assert_eq!(generation, 1);
        assert!(state.products.is_empty());
        assert_eq!(state.query.page_number, 1);
        assert_eq!(state.query.search_term, "shoes");
        assert_eq!(state.search_state, SearchState::Loading);
        assert!(state.fetch_in_flight);
    }

    #[test]
    fn pages_accumulate_within_one_session() {
        let mut state = ControllerState::new();
        state.begin_search("".to_string());
        state.apply_fetch(Ok(vec![product("p1")]));

        let generation = state.begin_next_page();
        state.apply_fetch(Ok(vec![product("p2")]));

        assert_eq!(generation, 1, "pagination keeps the session generation");
        assert_eq!(state.query.page_number, 2);
        let ids: Vec<&str> = state.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert_eq!(state.search_state, SearchState::Success);
    }

    #[test]
    fn an_empty_page_still_counts_as_success() {
        let mut state = ControllerState::new();
        state.begin_search("".to_string());
        state.apply_fetch(Ok(Vec::new()));

        assert_eq!(state.search_state, SearchState::Success);
        assert!(state.products.is_empty());
    }

    #[test]
    fn a_failure_keeps_accumulated_products() {
        let mut state = ControllerState::new();
        state.begin_search("".to_string());
        state.apply_fetch(Ok(vec![product("p1")]));

        state.begin_next_page();
        state.apply_fetch(Err(NetworkError::Unknown));

        assert_eq!(state.search_state, SearchState::NoResults);
        assert_eq!(state.products.len(), 1);
        assert!(!state.fetch_in_flight);
    }

    #[test]
    fn every_new_search_bumps_the_generation() {
        let mut state = ControllerState::new();
        assert_eq!(state.begin_search("a".to_string()), 1);
        assert_eq!(state.begin_search("ab".to_string()), 2);
        assert_eq!(state.begin_next_page(), 2);
    }
}
