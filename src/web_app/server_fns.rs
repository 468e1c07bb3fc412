// web_app/server_fns.rs - Leptos server function declarations
//
// The two API endpoints the storefront consumes. The #[server] macro
// generates the server handler on ssr builds and an HTTP stub on hydrate
// builds, so this file must compile for BOTH features.
//
// Both functions return the raw JSON body rather than typed products:
// response-shape normalization is the client's job, and a body that is
// not an array must reach the session layer intact.

use leptos::prelude::*;
use leptos::server_fn::codec::{GetUrl, Json};
use serde_json::Value;

/// Fetch the full product catalog.
///
/// Served as `GET /api/products`.
#[server(name = FetchProducts, prefix = "/api", endpoint = "products", input = GetUrl)]
pub async fn fetch_products() -> Result<Value, ServerFnError> {
    use crate::web_app::api::catalog;

    tracing::info!("Catalog request");

    let listing = catalog::catalog_json()
        .map_err(|e| ServerFnError::new(format!("Catalog unavailable: {e}")))?;
    Ok(listing)
}

/// Fetch query-based recommendations.
///
/// Served as `POST /api/recommend` with a JSON body `{"query": "..."}`.
#[server(name = RecommendProducts, prefix = "/api", endpoint = "recommend", input = Json)]
pub async fn recommend_products(query: String) -> Result<Value, ServerFnError> {
    use crate::web_app::api::catalog;
    use crate::web_app::recommend;

    tracing::info!("Recommend request: query='{query}'");

    let products = catalog::catalog_products()
        .map_err(|e| ServerFnError::new(format!("Catalog unavailable: {e}")))?;
    let picks = recommend::recommend(&products, &query);

    tracing::info!("Recommend matched {} of {} products", picks.len(), products.len());

    serde_json::to_value(&picks)
        .map_err(|e| ServerFnError::new(format!("Failed to encode recommendations: {e}")))
}
