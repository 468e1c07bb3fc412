// web_app/api/catalog.rs - Product catalog store
//
// The catalog is a flat JSON file read once at first use and cached for
// the lifetime of the process. Endpoints serve the raw JSON body; the
// client normalizes its shape on arrival.

use std::fs;
use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;

use crate::web_app::filter::normalize_listing;
use crate::web_app::model::Product;

/// Catalog file, relative to the server's working directory.
pub const CATALOG_PATH: &str = "data/products.json";

static CATALOG: OnceLock<Value> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The raw catalog listing, read from disk on first call.
pub fn catalog_json() -> Result<Value, CatalogError> {
    if let Some(listing) = CATALOG.get() {
        return Ok(listing.clone());
    }

    let listing = read_catalog(CATALOG_PATH)?;
    tracing::info!("Loaded catalog from {CATALOG_PATH}");
    Ok(CATALOG.get_or_init(|| listing).clone())
}

/// The catalog as typed products, for the recommendation engine.
pub fn catalog_products() -> Result<Vec<Product>, CatalogError> {
    Ok(normalize_listing(catalog_json()?))
}

fn read_catalog(path: &str) -> Result<Value, CatalogError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
