// web_app/pages/home.rs - Storefront home page
//
// Owns the shopper session and wires every user action to a session
// transition. The two fetches run through spawn_local with no
// cancellation: if overlapping requests resolve out of order, the last
// one to resolve wins, matching the storefront's long-standing behavior.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::{PriceRange, Product};
use crate::web_app::server_fns::{fetch_products, recommend_products};
use crate::web_app::session::SessionState;

/// Kick off a catalog fetch and fold the outcome into the session.
fn load_catalog(session: RwSignal<SessionState>) {
    spawn_local(async move {
        let outcome = fetch_products().await.map_err(|e| e.to_string());
        session.update(|s| s.apply_catalog_response(outcome));
    });
}

/// Handle a search submission. Blank queries fall back to the full
/// catalog without touching the recommend endpoint.
fn submit_search(session: RwSignal<SessionState>, query: String) {
    if query.trim().is_empty() {
        load_catalog(session);
        return;
    }

    session.update(|s| s.begin_search());
    spawn_local(async move {
        let outcome = recommend_products(query).await.map_err(|e| e.to_string());
        session.update(|s| s.apply_recommend_response(outcome));
    });
}

/// Storefront home page component
///
/// Composes the header, department bar, sidebar filters, and results
/// grid around a single session-state signal.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = RwSignal::new(SessionState::new());

    // Memoized pure derivations, keyed on the session
    let visible = Memo::new(move |_| session.with(|s| s.visible_products()));
    let categories = Memo::new(move |_| session.with(|s| s.categories()));

    let query = Signal::derive(move || session.with(|s| s.query.clone()));
    let cart_count = Signal::derive(move || session.with(|s| s.cart_count()));
    let selected_category = Signal::derive(move || session.with(|s| s.filters.category.clone()));
    let price_range = Signal::derive(move || session.with(|s| s.filters.price_range));
    let initial_loading = Signal::derive(move || session.with(|s| s.initial_loading));
    let search_loading = Signal::derive(move || session.with(|s| s.search_loading));

    let on_query_change = Callback::new(move |value: String| {
        session.update(|s| s.set_query(value));
    });

    let on_search = Callback::new(move |()| {
        let current = session.with_untracked(|s| s.query.clone());
        submit_search(session, current);
    });

    let on_reset = Callback::new(move |()| {
        session.update(|s| s.reset_to_home());
        load_catalog(session);
    });

    let on_select_category = Callback::new(move |category: String| {
        session.update(|s| s.select_category(&category));
    });

    let on_select_price = Callback::new(move |range: PriceRange| {
        session.update(|s| s.select_price_range(range));
    });

    let on_add_to_cart = Callback::new(move |product: Product| {
        session.update(|s| s.add_to_cart(product));
    });

    // First paint loads the full catalog. Effects only run on the client,
    // so the server renders the initial loading state.
    Effect::new(move |_| {
        load_catalog(session);
    });

    view! {
        <div class="min-h-screen bg-gray-100 font-sans text-gray-900">
            <SiteHeader
                query=query
                cart_count=cart_count
                on_query_change=on_query_change
                on_search=on_search
                on_reset=on_reset
            />
            <DepartmentBar on_reset=on_reset />

            <main class="max-w-7xl mx-auto px-4 py-6 flex gap-6 items-start">
                <FilterSidebar
                    categories=Signal::from(categories)
                    selected_category=selected_category
                    price_range=price_range
                    on_select_category=on_select_category
                    on_select_price=on_select_price
                />

                <section class="flex-1 min-w-0">
                    {move || {
                        if initial_loading.get() {
                            view! { <Loading message="Loading products..." /> }.into_any()
                        } else {
                            view! {
                                <div>
                                    <div class="flex items-baseline justify-between mb-4">
                                        <h2 class="text-lg font-bold">"Results"</h2>
                                        <span class="text-xs text-gray-500">
                                            "Check each product page for other buying options."
                                        </span>
                                    </div>

                                    <Show when=move || search_loading.get()>
                                        <Loading message="Searching products..." />
                                    </Show>

                                    <ProductGrid
                                        products=Signal::from(visible)
                                        on_add_to_cart=on_add_to_cart
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
