// tests/session_flow_tests.rs - Shopper session scenarios
//
// Drives the session state machine through whole user journeys: initial
// catalog load, searching, filtering, adding to the cart, and resetting,
// including the failure paths the adapters absorb.

use serde_json::json;

use smartshop::fixtures;
use smartshop::web_app::model::{FilterSelection, PriceRange, ALL_CATEGORIES};
use smartshop::web_app::session::SessionState;

#[test]
fn test_initial_load_happy_path() {
    let mut session = SessionState::new();
    assert!(session.initial_loading);

    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));

    assert!(!session.initial_loading);
    assert_eq!(session.products, fixtures::sample_catalog());
    assert_eq!(session.visible_products(), fixtures::sample_catalog());
}

#[test]
fn test_initial_load_transport_failure_settles_empty() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Err("connection reset by peer".to_string()));

    assert!(!session.initial_loading, "the latch clears on failure too");
    assert!(session.products.is_empty());
    assert!(session.visible_products().is_empty());
    assert_eq!(session.categories(), vec![ALL_CATEGORIES]);
}

#[test]
fn test_initial_load_non_array_body_settles_empty() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(json!({"detail": "tea pot"})));

    assert!(!session.initial_loading);
    assert!(session.products.is_empty());
}

#[test]
fn test_search_failure_keeps_prior_results() {
    // A failed search must not wipe what the shopper is looking at, even
    // though a failed catalog load does.
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));
    let before = session.products.clone();

    session.begin_search();
    session.apply_recommend_response(Err("upstream timed out".to_string()));

    assert_eq!(session.products, before);
    assert!(!session.search_loading);

    // Same session, catalog failure: now the set empties
    session.apply_catalog_response(Err("upstream timed out".to_string()));
    assert!(session.products.is_empty());
}

#[test]
fn test_search_replaces_listing_and_filters_still_apply() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));

    session.set_query("headphones".to_string());
    session.begin_search();
    assert!(session.search_loading);

    // Recommendations arrive: only the two audio products
    session.apply_recommend_response(Ok(json!([
        {
            "id": 3, "name": "Wireless Earbuds", "description": "",
            "category": "Electronics", "price": 49.99, "rating": 4.2,
            "reviews": 103, "image": "", "is_prime": true
        },
        {
            "id": 6, "name": "Noise Cancelling Headphones", "description": "",
            "category": "Electronics", "price": 129.99, "rating": 4.2,
            "reviews": 106, "image": "", "is_prime": true
        }
    ])));

    assert!(!session.search_loading);
    assert_eq!(session.products.len(), 2);
    assert_eq!(session.categories(), vec!["All", "Electronics"]);

    session.select_price_range(PriceRange::Over100);
    let ids: Vec<i32> = session.visible_products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![6]);
}

#[test]
fn test_cart_grows_across_searches_and_resets() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));

    let earbuds = session.products[2].clone();
    session.add_to_cart(earbuds.clone());
    session.add_to_cart(earbuds.clone());
    assert_eq!(session.cart_count(), 2);
    assert_eq!(session.cart[0], session.cart[1]);

    // Searching and resetting never shrink the cart
    session.begin_search();
    session.apply_recommend_response(Ok(json!([])));
    session.reset_to_home();
    assert_eq!(session.cart_count(), 2);
}

#[test]
fn test_reset_restores_defaults_but_not_products() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));
    session.set_query("dutch oven".to_string());
    session.select_category("Books");
    session.select_price_range(PriceRange::Under25);

    session.reset_to_home();

    assert_eq!(session.query, "");
    assert_eq!(session.filters, FilterSelection::default());
    // The product set is refreshed by the follow-up catalog fetch, not by
    // the reset itself
    assert_eq!(session.products, fixtures::sample_catalog());
}

#[test]
fn test_reset_twice_equals_reset_once() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));
    session.set_query("blocks".to_string());
    session.select_category("Toys");

    session.reset_to_home();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));
    let once = session.clone();

    session.reset_to_home();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));

    assert_eq!(session, once);
}

#[test]
fn test_out_of_set_filter_values_are_ignored() {
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));

    session.select_category("No Such Department");
    assert_eq!(session.filters.category, ALL_CATEGORIES);

    // Unknown price labels never reach the session: parsing rejects them
    assert_eq!(PriceRange::from_label("Exactly $33.33"), None);
}

#[test]
fn test_overlapping_responses_last_resolved_wins() {
    // Two in-flight requests resolving out of submission order: the state
    // holds whatever resolved last. There is no cancellation.
    let mut session = SessionState::new();
    session.apply_catalog_response(Ok(fixtures::sample_catalog_json()));

    session.begin_search();
    session.begin_search();

    // Second submission's response resolves first
    session.apply_recommend_response(Ok(json!([
        {
            "id": 5, "name": "Building Blocks", "description": "",
            "category": "Toys", "price": 60.25, "rating": 4.2,
            "reviews": 105, "image": "", "is_prime": false
        }
    ])));
    // First submission's response resolves last and overwrites
    session.apply_recommend_response(Ok(json!([])));

    assert!(session.products.is_empty());
    assert!(!session.search_loading);
}
