// web_app/components/storefront.rs - Storefront chrome
//
// The header (brand, search form, cart), the department menu bar, and the
// sidebar filters. State lives in the page; these components only render
// props and raise callbacks.

use leptos::prelude::*;

use crate::web_app::model::PriceRange;

/// Site header: brand logo, search form, account chrome, and cart count.
///
/// Clicking the brand resets the session to the home view.
#[component]
pub fn SiteHeader(
    /// Current search query
    query: Signal<String>,
    /// Number of items in the cart
    cart_count: Signal<usize>,
    /// Raised on every keystroke in the search box
    on_query_change: Callback<String>,
    /// Raised when the search form is submitted
    on_search: Callback<()>,
    /// Raised by the brand logo
    on_reset: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <header class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center gap-6">
                <div
                    class="flex items-baseline cursor-pointer select-none"
                    on:click=move |_| on_reset.run(())
                >
                    <span class="text-2xl font-bold tracking-tight">"smartshop"</span>
                    <span class="text-2xl font-bold text-orange-400">".ai"</span>
                </div>

                <div class="hidden md:flex items-center gap-1 text-sm">
                    <span>"📍"</span>
                    <div class="flex flex-col leading-tight">
                        <span class="text-gray-400 text-xs">"Deliver to"</span>
                        <span class="font-semibold">"New York"</span>
                    </div>
                </div>

                <form on:submit=on_submit class="flex flex-1">
                    <input
                        type="text"
                        placeholder="Search smartshop.ai"
                        class="flex-1 px-4 py-2 rounded-l-md text-gray-900 outline-none"
                        prop:value=move || query.get()
                        on:input=move |ev| on_query_change.run(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 bg-orange-400 hover:bg-orange-500 rounded-r-md font-semibold text-gray-900"
                    >
                        "🔍"
                    </button>
                </form>

                <div class="hidden lg:flex flex-col leading-tight text-xs">
                    <span class="text-gray-400">"Hello, sign in"</span>
                    <span class="font-semibold text-sm">"Account & Lists"</span>
                </div>
                <div class="hidden lg:flex flex-col leading-tight text-xs">
                    <span class="text-gray-400">"Returns"</span>
                    <span class="font-semibold text-sm">"& Orders"</span>
                </div>

                <div class="flex items-end gap-1">
                    <div class="relative">
                        <span class="text-3xl">"🛒"</span>
                        <span class="absolute -top-1 -right-1 bg-orange-400 text-gray-900 text-xs \
                                     font-bold rounded-full w-5 h-5 flex items-center justify-center">
                            {move || cart_count.get()}
                        </span>
                    </div>
                    <span class="font-semibold text-sm">"Cart"</span>
                </div>
            </div>
        </header>
    }
}

/// Department menu bar below the header.
///
/// The "All" menu control resets the session, matching the brand logo.
#[component]
pub fn DepartmentBar(
    /// Raised by the menu control
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="bg-gray-800 text-white text-sm">
            <div class="max-w-7xl mx-auto px-4 h-10 flex items-center gap-6">
                <button
                    type="button"
                    class="flex items-center gap-1 font-semibold hover:text-orange-400"
                    on:click=move |_| on_reset.run(())
                >
                    <span>"☰"</span>
                    <span>"All"</span>
                </button>
                <span class="hidden sm:inline">"Today's Deals"</span>
                <span class="hidden sm:inline">"Customer Service"</span>
                <span class="hidden md:inline">"Registry"</span>
                <span class="hidden md:inline">"Gift Cards"</span>
                <span class="hidden md:inline">"Sell"</span>
            </div>
        </nav>
    }
}

/// Sidebar filters: department list, price brackets, and the static
/// review-stars section.
#[component]
pub fn FilterSidebar(
    /// Distinct categories of the current product set, "All" first
    categories: Signal<Vec<String>>,
    /// Currently selected category
    selected_category: Signal<String>,
    /// Currently selected price bracket
    price_range: Signal<PriceRange>,
    /// Raised with the clicked category
    on_select_category: Callback<String>,
    /// Raised with the clicked price bracket
    on_select_price: Callback<PriceRange>,
) -> impl IntoView {
    view! {
        <aside class="w-56 flex-shrink-0 space-y-6">
            <div>
                <h3 class="font-bold text-gray-900 mb-2">"Department"</h3>
                <ul class="space-y-1">
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            let cat_for_class = category.clone();
                            let cat_for_click = category.clone();
                            let is_active = move || selected_category.get() == cat_for_class;
                            view! {
                                <li
                                    class=move || {
                                        if is_active() {
                                            "text-sm font-bold text-orange-600 cursor-pointer"
                                        } else {
                                            "text-sm text-gray-700 hover:text-orange-600 cursor-pointer"
                                        }
                                    }
                                    on:click=move |_| on_select_category.run(cat_for_click.clone())
                                >
                                    {category.clone()}
                                </li>
                            }
                        }
                    />
                </ul>
            </div>

            <div>
                <h3 class="font-bold text-gray-900 mb-2">"Price"</h3>
                <ul class="space-y-1">
                    {PriceRange::ALL_RANGES.into_iter().map(|range| {
                        let is_active = move || price_range.get() == range;
                        view! {
                            <li
                                class=move || {
                                    if is_active() {
                                        "text-sm font-bold text-orange-600 cursor-pointer"
                                    } else {
                                        "text-sm text-gray-700 hover:text-orange-600 cursor-pointer"
                                    }
                                }
                                on:click=move |_| on_select_price.run(range)
                            >
                                {range.to_string()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>

            <div>
                <h3 class="font-bold text-gray-900 mb-2">"Avg. Customer Review"</h3>
                <div class="space-y-1">
                    {[4usize, 3, 2, 1].into_iter().map(|stars| {
                        view! {
                            <div class="flex items-center gap-1 text-sm text-gray-700">
                                {(0..5).map(|i| {
                                    let class = if i < stars {
                                        "text-yellow-500"
                                    } else {
                                        "text-gray-300"
                                    };
                                    view! { <span class=class>"★"</span> }
                                }).collect_view()}
                                <span>"& Up"</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </aside>
    }
}
