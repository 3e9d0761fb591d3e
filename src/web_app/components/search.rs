// web_app/components/search.rs - Search input
//
// The search bar is controlled: it shows `value`, reports every keystroke
// through `on_change` and reports an explicit submit through
// `on_request_search`. It keeps no text of its own.

use leptos::prelude::*;

/// Search bar with submit and clear controls
#[component]
pub fn SearchBar(
    /// Current search text
    #[prop(into)]
    value: Signal<String>,
    /// Fired on every keystroke with the new text
    on_change: Callback<String>,
    /// Fired when the user submits (enter or the search button)
    on_request_search: Callback<()>,
    #[prop(default = "Search products...")]
    placeholder: &'static str,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_request_search.run(());
    };

    let has_text = move || !value.get().is_empty();

    view! {
        <form on:submit=on_submit class="w-full" role="search">
            <div class="flex gap-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder=placeholder
                        class="w-full pl-10 pr-10 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || value.get()
                        on:input=move |ev| on_change.run(event_target_value(&ev))
                    />
                    <Show when=has_text>
                        <button
                            type="button"
                            aria-label="Clear search"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                            on:click=move |_| on_change.run(String::new())
                        >
                            "✕"
                        </button>
                    </Show>
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                           hover:bg-blue-700 active:bg-blue-800 transition-all \
                           font-semibold shadow-md hover:shadow-lg"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}
