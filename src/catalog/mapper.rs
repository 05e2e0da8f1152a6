//! Wire-to-display mapping for catalog records.

use crate::catalog::currency_formatted;
use crate::domain::Product;
use crate::gateway::wire::{ProductRecord, ProductsResponse};

/// Maps a decoded response body into display products, preserving record
/// order. `None` (a 204 response) and an empty record list both map to an
/// empty sequence.
pub fn to_products(response: Option<&ProductsResponse>) -> Vec<Product> {
    match response {
        Some(body) => body.plp_results.records.iter().map(to_product).collect(),
        None => Vec::new(),
    }
}

fn to_product(record: &ProductRecord) -> Product {
    Product {
        id: record.product_id.clone(),
        display_name: record.product_display_name.clone(),
        brand: record.brand.clone(),
        display_list_price: currency_formatted(record.list_price),
        display_promo_price: currency_formatted(record.promo_price),
        image_url: record.lg_image.clone(),
        colors: record
            .variants_color
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|variant| variant.color_hex.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::wire::{PlpResults, VariantColor};

    fn record(id: &str) -> ProductRecord {
        ProductRecord {
            product_id: id.to_string(),
            product_display_name: format!("Product {id}"),
            brand: Some("Brand A".to_string()),
            list_price: 99.95,
            promo_price: 49.99,
            lg_image: Some("https://example.com/p.jpg".to_string()),
            variants_color: Some(vec![
                VariantColor {
                    sku_id: "foo".to_string(),
                    color_hex: "#FFFFFF".to_string(),
                },
                VariantColor {
                    sku_id: "bar".to_string(),
                    color_hex: "#000000".to_string(),
                },
            ]),
        }
    }

    fn response(records: Vec<ProductRecord>) -> ProductsResponse {
        ProductsResponse {
            plp_results: PlpResults { records },
        }
    }

    #[test]
    fn maps_records_one_to_one() {
        let body = response(vec![record("p1"), record("p2")]);
        let products = to_products(Some(&body));

        assert_eq!(products.len(), 2);
        assert_eq!(
            products[0],
            Product {
                id: "p1".to_string(),
                display_name: "Product p1".to_string(),
                brand: Some("Brand A".to_string()),
                display_list_price: "$99.95".to_string(),
                display_promo_price: "$49.99".to_string(),
                image_url: Some("https://example.com/p.jpg".to_string()),
                colors: vec!["#FFFFFF".to_string(), "#000000".to_string()],
            }
        );
        assert_eq!(products[1].id, "p2");
    }

    #[test]
    fn missing_colors_default_to_an_empty_list() {
        let mut bare = record("p1");
        bare.variants_color = None;
        bare.brand = None;
        bare.lg_image = None;

        let products = to_products(Some(&response(vec![bare])));
        assert_eq!(products[0].colors, Vec::<String>::new());
        assert_eq!(products[0].brand, None);
        assert_eq!(products[0].image_url, None);
    }

    #[test]
    fn no_body_maps_to_no_products() {
        assert!(to_products(None).is_empty());
        assert!(to_products(Some(&response(Vec::new()))).is_empty());
    }
}
