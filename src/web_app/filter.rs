// web_app/filter.rs - Pure derivation of the displayed product subset
//
// Everything in this module is a pure function over the current product
// set and filter selections. The page wraps these in memos so they are
// recomputed only when products or filters actually change.

use serde_json::Value;

use crate::web_app::model::{FilterSelection, Product, ALL_CATEGORIES};

/// Coerce a raw API response body into a product list.
//
// This is the single normalization boundary for upstream data: a
// non-array body becomes an empty list, and array entries that do not
// decode into a `Product` are skipped. Callers never see an error.
pub fn normalize_listing(body: Value) -> Vec<Product> {
    let entries = match body {
        Value::Array(entries) => entries,
        other => {
            tracing::warn!("API returned non-array data: {other}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Product>(entry) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Skipping malformed product entry: {e}");
                None
            }
        })
        .collect()
}

/// Derive the visible subset of `products` under `selection`.
///
/// A product is retained iff the selected category is `All` or matches the
/// product's category, and its price falls inside the selected bracket.
/// Relative order is preserved; nothing is re-sorted.
pub fn visible_products(products: &[Product], selection: &FilterSelection) -> Vec<Product> {
    products
        .iter()
        .filter(|product| {
            (selection.category == ALL_CATEGORIES || product.category == selection.category)
                && selection.price_range.contains(product.price)
        })
        .cloned()
        .collect()
}

/// The department list: `"All"` followed by each distinct category in
/// first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
