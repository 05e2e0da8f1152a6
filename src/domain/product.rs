/// A display-ready catalog product.
///
/// Derived 1:1 from a wire record by the catalog mapper. Prices are already
/// formatted as locale currency strings, so the presentation surface renders
/// them verbatim.
///
/// Equality is structural over all fields, never identity-only. Two products
/// with the same id but different formatted prices are not equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub display_name: String,
    pub brand: Option<String>,
    pub display_list_price: String,
    pub display_promo_price: String,
    pub image_url: Option<String>,
    /// Hex color strings for the available variants. Empty when the source
    /// record carried no variant colors.
    pub colors: Vec<String>,
}

/// What the presentation surface should show for the current search session.
///
/// Exactly one value at any time. `Success` means the most recent applied
/// fetch succeeded, even when it returned zero records; `NoResults` means it
/// failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Loading,
    Success,
    NoResults,
}
