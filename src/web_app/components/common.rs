// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-orange-400"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Star rating row
///
/// Shows the floor of the rating as filled stars, the rest empty. The
/// storefront never renders half stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
) -> impl IntoView {
    let full_stars = (rating.floor() as usize).min(5);
    let empty_stars = 5 - full_stars;

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-500 text-base">"★"</span>
            }).collect_view()}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-300 text-base">"★"</span>
            }).collect_view()}
        </div>
    }
}
