// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, meta tags, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="SmartShop" />
        <Meta name="description" content="Storefront with AI-backed product recommendations" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link
        <Stylesheet id="leptos" href="/pkg/smartshop.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-orange-400 text-gray-900 rounded-lg hover:bg-orange-500 transition-colors"
                >
                    "Back to the storefront"
                </a>
            </div>
        </div>
    }
}
