/// The search text plus page cursor driving one logical search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Free-text search term. An empty term is valid and returns the
    /// unfiltered, default-sorted catalog.
    pub search_term: String,
    /// Upstream sort option. `None` falls back to the catalog default.
    pub sort_option: Option<String>,
    /// 1-based page cursor.
    pub page_number: u32,
}

impl ProductQuery {
    /// A fresh page-1 query for the given term.
    pub fn for_term(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            sort_option: None,
            page_number: 1,
        }
    }

    /// Moves the cursor to the next page.
    pub fn advance(&mut self) {
        self.page_number += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_query_starts_at_page_one() {
        let query = ProductQuery::for_term("sneakers");
        assert_eq!(query.search_term, "sneakers");
        assert_eq!(query.page_number, 1);
        assert_eq!(query.sort_option, None);
    }

    #[test]
    fn advance_increments_the_cursor() {
        let mut query = ProductQuery::for_term("");
        query.advance();
        query.advance();
        assert_eq!(query.page_number, 3);
    }
}
