// web_app/session.rs - The single mutable state bundle for a shopper session
//
// Everything transient lives here: query text, the current product set,
// filter selections, the cart, and the two loading latches. The page owns
// one `SessionState` inside a signal and funnels every user action through
// the transition methods below, which keeps the whole state machine
// testable without a rendering layer.
//
// All transitions are synchronous and total: none of them can fail. The
// only fallible work is the two network calls, whose outcomes are handed
// in as `Result`s and absorbed here.

use serde_json::Value;

use crate::web_app::filter;
use crate::web_app::model::{FilterSelection, PriceRange, Product, ALL_CATEGORIES};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Current free-text search string.
    pub query: String,
    /// Products currently known to the client: the full catalog, or the
    /// recommendations for the active search.
    pub products: Vec<Product>,
    pub filters: FilterSelection,
    /// Append-only; duplicates of the same product are permitted.
    pub cart: Vec<Product>,
    /// True until the first catalog fetch settles.
    pub initial_loading: bool,
    /// True only while a recommend request is in flight.
    pub search_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            query: String::new(),
            products: Vec::new(),
            filters: FilterSelection::default(),
            cart: Vec::new(),
            initial_loading: true,
            search_loading: false,
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Record the outcome of a catalog fetch.
    ///
    /// Success replaces the product set with the normalized body; a
    /// non-array body or a transport failure empties it. Either way the
    /// initial-loading latch clears exactly once per call.
    pub fn apply_catalog_response(&mut self, response: Result<Value, String>) {
        match response {
            Ok(body) => self.products = filter::normalize_listing(body),
            Err(e) => {
                tracing::error!("Error fetching products: {e}");
                self.products = Vec::new();
            }
        }
        self.initial_loading = false;
    }

    /// Flag that a recommend request is about to go out.
    pub fn begin_search(&mut self) {
        self.search_loading = true;
    }

    /// Record the outcome of a recommend request.
    ///
    /// Success replaces the product set (non-array bodies normalize to
    /// empty), but a transport failure leaves the previous products in
    /// place: a failed search must not wipe results already on screen.
    /// This deliberately differs from the catalog path.
    pub fn apply_recommend_response(&mut self, response: Result<Value, String>) {
        match response {
            Ok(body) => self.products = filter::normalize_listing(body),
            Err(e) => tracing::error!("Error recommending products: {e}"),
        }
        self.search_loading = false;
    }

    /// Select a department. Values outside the current category list are
    /// dropped; the sidebar is the source of truth for valid entries.
    pub fn select_category(&mut self, category: &str) {
        let known =
            category == ALL_CATEGORIES || self.products.iter().any(|p| p.category == category);
        if known {
            self.filters.category = category.to_string();
        } else {
            tracing::debug!("Ignoring unknown category selection: {category}");
        }
    }

    pub fn select_price_range(&mut self, range: PriceRange) {
        self.filters.price_range = range;
    }

    /// Append a product to the cart. No dedup, no quantity merging.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.push(product);
    }

    /// Clear the query and filters, as triggered by the brand logo or the
    /// department-menu control. The caller re-fetches the catalog.
    pub fn reset_to_home(&mut self) {
        self.query.clear();
        self.filters = FilterSelection::default();
    }

    // Derived views. The page wraps these in memos keyed on the session
    // so they recompute only when products or filters change.

    pub fn visible_products(&self) -> Vec<Product> {
        filter::visible_products(&self.products, &self.filters)
    }

    pub fn categories(&self) -> Vec<String> {
        filter::distinct_categories(&self.products)
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }
}
