// fixtures/mod.rs - Reusable sample data for tests
//
// A small catalog spanning every category and price bracket the filters
// care about, plus helpers to present it the way the API does.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::web_app::model::Product;

/// Build one product with the fields the filters and recommender read.
pub fn product(
    id: i32,
    name: &str,
    category: &str,
    description: &str,
    price_cents: i64,
    is_prime: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price: Decimal::new(price_cents, 2),
        rating: Decimal::new(42, 1),
        reviews: 100 + id,
        image: format!("https://example.com/img/{id}.jpg"),
        is_prime,
    }
}

/// A catalog with at least one product in every price bracket and three
/// distinct categories.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Paperback Novel", "Books", "A gripping mystery novel", 1099, true),
        product(2, "Hardcover Cookbook", "Books", "Weeknight dinner recipes", 3450, false),
        product(3, "Wireless Earbuds", "Electronics", "Bluetooth earbuds with charging case", 4999, true),
        product(4, "Bluetooth Speaker", "Electronics", "Portable waterproof speaker", 8900, true),
        product(5, "Building Blocks", "Toys", "Creative construction set for kids", 6025, false),
        product(6, "Noise Cancelling Headphones", "Electronics", "Over-ear headphones for travel", 12999, true),
    ]
}

/// The sample catalog as the API would serve it: a raw JSON array.
pub fn sample_catalog_json() -> Value {
    serde_json::to_value(sample_catalog()).expect("sample catalog serializes")
}
