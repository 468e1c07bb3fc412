// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel value for "no category selected" in the department filter.
pub const ALL_CATEGORIES: &str = "All";

/// Product from the catalog (matches data/products.json schema)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub rating: Decimal,
    pub reviews: i32,
    pub image: String,
    pub is_prime: bool,
}

/// Price bracket filter (fixed closed set)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    All,
    Under25,
    From25To50,
    From50To100,
    Over100,
}

impl PriceRange {
    /// Every bracket, in the order the sidebar lists them.
    pub const ALL_RANGES: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Under25,
        PriceRange::From25To50,
        PriceRange::From50To100,
        PriceRange::Over100,
    ];

    /// Whether `price` falls inside this bracket.
    ///
    /// Boundaries are inclusive on both sides of the two middle brackets,
    /// so a price of exactly 50 passes both "$25 to $50" and "$50 to $100".
    pub fn contains(&self, price: Decimal) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Under25 => price < Decimal::new(25, 0),
            PriceRange::From25To50 => {
                price >= Decimal::new(25, 0) && price <= Decimal::new(50, 0)
            }
            PriceRange::From50To100 => {
                price >= Decimal::new(50, 0) && price <= Decimal::new(100, 0)
            }
            PriceRange::Over100 => price > Decimal::new(100, 0),
        }
    }

    /// Parse a sidebar label back into a bracket.
    ///
    /// Returns `None` for anything outside the closed set; callers drop
    /// such selections.
    pub fn from_label(label: &str) -> Option<PriceRange> {
        match label {
            "All" => Some(PriceRange::All),
            "Under $25" => Some(PriceRange::Under25),
            "$25 to $50" => Some(PriceRange::From25To50),
            "$50 to $100" => Some(PriceRange::From50To100),
            "Over $100" => Some(PriceRange::Over100),
            _ => None,
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceRange::All => write!(f, "All"),
            PriceRange::Under25 => write!(f, "Under $25"),
            PriceRange::From25To50 => write!(f, "$25 to $50"),
            PriceRange::From50To100 => write!(f, "$50 to $100"),
            PriceRange::Over100 => write!(f, "Over $100"),
        }
    }
}

/// Filter selections applied by the shopper
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// A category present in the current product set, or `ALL_CATEGORIES`.
    pub category: String,
    pub price_range: PriceRange,
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            category: ALL_CATEGORIES.to_string(),
            price_range: PriceRange::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(units: i64, scale: u32) -> Decimal {
        Decimal::new(units, scale)
    }

    #[test]
    fn test_price_range_default() {
        assert_eq!(PriceRange::default(), PriceRange::All);
    }

    #[test]
    fn test_price_range_display_labels() {
        assert_eq!(PriceRange::All.to_string(), "All");
        assert_eq!(PriceRange::Under25.to_string(), "Under $25");
        assert_eq!(PriceRange::From25To50.to_string(), "$25 to $50");
        assert_eq!(PriceRange::From50To100.to_string(), "$50 to $100");
        assert_eq!(PriceRange::Over100.to_string(), "Over $100");
    }

    #[test]
    fn test_price_range_label_round_trip() {
        for range in PriceRange::ALL_RANGES {
            assert_eq!(PriceRange::from_label(&range.to_string()), Some(range));
        }
    }

    #[test]
    fn test_price_range_rejects_unknown_labels() {
        assert_eq!(PriceRange::from_label("Under $9000"), None);
        assert_eq!(PriceRange::from_label(""), None);
        assert_eq!(PriceRange::from_label("under $25"), None);
    }

    #[test]
    fn test_price_bracket_boundaries() {
        // 25 sits in the 25-50 bracket, not in Under25
        assert!(!PriceRange::Under25.contains(dec(25, 0)));
        assert!(PriceRange::From25To50.contains(dec(25, 0)));

        // 50 is inclusive on both middle brackets
        assert!(PriceRange::From25To50.contains(dec(50, 0)));
        assert!(PriceRange::From50To100.contains(dec(50, 0)));

        // 100 belongs to 50-100, not Over100
        assert!(PriceRange::From50To100.contains(dec(100, 0)));
        assert!(!PriceRange::Over100.contains(dec(100, 0)));
        assert!(PriceRange::Over100.contains(dec(10001, 2)));
    }

    #[test]
    fn test_price_bracket_all_matches_everything() {
        for price in [dec(0, 0), dec(2499, 2), dec(50, 0), dec(99999, 2)] {
            assert!(PriceRange::All.contains(price));
        }
    }

    #[test]
    fn test_filter_selection_default() {
        let selection = FilterSelection::default();
        assert_eq!(selection.category, ALL_CATEGORIES);
        assert_eq!(selection.price_range, PriceRange::All);
    }

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 7,
            "name": "Noise Cancelling Headphones",
            "description": "Over-ear wireless headphones with 30h battery",
            "category": "Electronics",
            "price": 129.99,
            "rating": 4.5,
            "reviews": 2841,
            "image": "https://example.com/img/headphones.jpg",
            "is_prime": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.category, "Electronics");
        assert_eq!(product.price, Decimal::new(12999, 2));
        assert_eq!(product.rating, Decimal::new(45, 1));
        assert!(product.is_prime);
    }
}
