// web_app/recommend.rs - Keyword recommendation engine
//
// Ranks the catalog against a free-text query in two tiers: products whose
// name or category mentions a query keyword come first; only when no such
// product exists do description-only matches stand in. Matching is
// case-insensitive substring containment, and a keyword with a trailing
// "s" also matches its singular form, so "headphones" finds "headphone".

use crate::web_app::model::Product;

/// Pick the products that best match `query`, preserving catalog order.
pub fn recommend<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let keywords: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut name_matches = Vec::new();
    let mut desc_matches = Vec::new();

    for product in products {
        let primary = format!("{} {}", product.name, product.category).to_lowercase();
        if any_keyword_matches(&keywords, &primary) {
            name_matches.push(product);
            continue;
        }

        let description = product.description.to_lowercase();
        if any_keyword_matches(&keywords, &description) {
            desc_matches.push(product);
        }
    }

    if name_matches.is_empty() {
        desc_matches
    } else {
        name_matches
    }
}

fn any_keyword_matches(keywords: &[String], text: &str) -> bool {
    keywords.iter().any(|keyword| {
        if text.contains(keyword.as_str()) {
            return true;
        }
        // Plural query, singular text: "books" should still find "book"
        match keyword.strip_suffix('s') {
            Some(singular) if !singular.is_empty() => text.contains(singular),
            _ => false,
        }
    })
}
