// web_app/components/product.rs - Product display components
//
// ProductCard renders one catalog entry in the results grid; ProductGrid
// lays out the visible product set.

use leptos::prelude::*;

use super::common::StarRating;
use crate::web_app::model::Product;

/// Split a price into whole dollars and a two-digit cent string, the way
/// the card displays it.
pub fn split_price(price: f64) -> (i64, String) {
    let whole = price.floor() as i64;
    let cents = ((price - price.floor()) * 100.0).round() as i64;
    (whole, format!("{cents:02}"))
}

/// Product card for the results grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Raised with the product when "Add to Cart" is clicked
    on_add_to_cart: Callback<Product>,
) -> impl IntoView {
    let rating: f64 = product.rating.try_into().unwrap_or(0.0);
    let price: f64 = product.price.try_into().unwrap_or(0.0);
    let (price_whole, price_fraction) = split_price(price);
    let reviews = product.reviews;
    let is_prime = product.is_prime;

    let product_for_cart = product.clone();

    view! {
        <div class="bg-white border border-gray-200 rounded p-4 flex flex-col">
            <div class="h-44 flex items-center justify-center mb-3 overflow-hidden">
                <img
                    src=product.image.clone()
                    alt=product.name.clone()
                    class="max-h-full object-contain"
                />
            </div>

            <h3 class="text-sm text-gray-900 line-clamp-2 mb-1">{product.name.clone()}</h3>

            <div class="flex items-center gap-1 mb-1">
                <StarRating rating=rating />
                <span class="text-xs text-blue-600">{reviews}</span>
            </div>

            <div class="flex items-start mb-1">
                <span class="text-xs mt-0.5">"$"</span>
                <span class="text-2xl font-semibold">{price_whole}</span>
                <span class="text-xs mt-0.5">{price_fraction}</span>
            </div>

            <Show when=move || is_prime>
                <div class="flex items-center gap-1 mb-1">
                    <span class="text-blue-500 font-bold text-xs">"✓"</span>
                    <span class="text-blue-500 font-bold text-xs italic">"prime"</span>
                </div>
            </Show>

            <div class="text-xs text-gray-700 mb-3">
                <span>"FREE delivery "</span>
                <span class="font-semibold">"Mon, Nov 27"</span>
            </div>

            <button
                type="button"
                class="mt-auto bg-yellow-400 hover:bg-yellow-500 text-sm rounded-full py-1.5 font-medium"
                on:click=move |_| on_add_to_cart.run(product_for_cart.clone())
            >
                "Add to Cart"
            </button>
        </div>
    }
}

/// Grid layout for the visible product set
#[component]
pub fn ProductGrid(
    /// Products to display, already filtered
    products: Signal<Vec<Product>>,
    /// Forwarded to each card
    on_add_to_cart: Callback<Product>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| {
                    view! { <ProductCard product=product on_add_to_cart=on_add_to_cart /> }
                }
            />
        </div>
    }
}
