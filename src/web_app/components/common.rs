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
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Price with the storefront currency symbol
#[component]
pub fn PriceDisplay(
    /// Pre-formatted price, e.g. `€10.00`
    price: String,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-3xl font-bold text-blue-600"
    } else {
        "text-lg font-semibold text-gray-900 mt-auto"
    };

    view! { <span class=class>{price}</span> }
}

/// Link styled as the primary action
#[component]
pub fn BackLink(
    /// Target path
    #[prop(default = "/")]
    href: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="inline-block px-6 py-3 bg-blue-600 text-white rounded-lg \
                   hover:bg-blue-700 transition-colors font-medium"
        >
            {children()}
        </a>
    }
}
