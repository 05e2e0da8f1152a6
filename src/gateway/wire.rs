//! Wire types for the catalog search payload.
//!
//! These mirror the upstream JSON shape exactly and stay immutable once
//! decoded. Display concerns (currency strings, defaulted color lists) live in
//! the catalog mapper, not here.

use serde::{Deserialize, Serialize};

/// Top-level body of a catalog search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub plp_results: PlpResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlpResults {
    pub records: Vec<ProductRecord>,
}

/// One catalog record as returned by the upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_id: String,
    pub product_display_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub list_price: f64,
    pub promo_price: f64,
    #[serde(default)]
    pub lg_image: Option<String>,
    #[serde(default)]
    pub variants_color: Option<Vec<VariantColor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantColor {
    pub sku_id: String,
    pub color_hex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_record() {
        let payload = r##"{
            "plpResults": {
                "records": [{
                    "productId": "p1",
                    "productDisplayName": "Product 1",
                    "brand": "Brand A",
                    "listPrice": 99.95,
                    "promoPrice": 49.99,
                    "lgImage": "https://example.com/p1.jpg",
                    "variantsColor": [
                        { "skuId": "foo", "colorHex": "#FFFFFF" },
                        { "skuId": "bar", "colorHex": "#000000" }
                    ]
                }]
            }
        }"##;

        let body: ProductsResponse = serde_json::from_str(payload).unwrap();
        let record = &body.plp_results.records[0];
        assert_eq!(record.product_id, "p1");
        assert_eq!(record.product_display_name, "Product 1");
        assert_eq!(record.brand.as_deref(), Some("Brand A"));
        assert_eq!(record.list_price, 99.95);
        assert_eq!(record.promo_price, 49.99);
        assert_eq!(record.lg_image.as_deref(), Some("https://example.com/p1.jpg"));
        let colors = record.variants_color.as_ref().unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].color_hex, "#FFFFFF");
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let payload = r#"{
            "plpResults": {
                "records": [{
                    "productId": "p2",
                    "productDisplayName": "Product 2",
                    "listPrice": 10.0,
                    "promoPrice": 10.0
                }]
            }
        }"#;

        let body: ProductsResponse = serde_json::from_str(payload).unwrap();
        let record = &body.plp_results.records[0];
        assert_eq!(record.brand, None);
        assert_eq!(record.lg_image, None);
        assert!(record.variants_color.is_none());
    }
}
