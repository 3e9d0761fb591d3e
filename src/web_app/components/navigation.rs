// web_app/components/navigation.rs - Bottom tab bar

use leptos::prelude::*;
use crate::web_app::model::NavTab;

/// Highlight `tab` and run `on_navigate` with its route, if it has one.
///
/// Orders has no route: it moves the highlight and nothing else.
pub fn select_tab(tab: NavTab, selected: RwSignal<NavTab>, on_navigate: Callback<String>) {
    selected.set(tab);
    if let Some(route) = tab.route() {
        on_navigate.run(route.to_string());
    }
}

/// Fixed bottom navigation with Home / Orders / Account
#[component]
pub fn BottomNavigation(
    /// Currently highlighted tab
    selected: RwSignal<NavTab>,
    /// Called with the route of a clicked Home or Account tab
    on_navigate: Callback<String>,
) -> impl IntoView {
    view! {
        <nav class="fixed bottom-0 inset-x-0 w-full bg-white border-t border-gray-200 shadow-lg z-40">
            <div class="flex justify-around">
                {NavTab::ALL.into_iter().map(|tab| {
                    let is_selected = move || selected.get() == tab;
                    view! {
                        <button
                            type="button"
                            data-tab-index=tab.index().to_string()
                            aria-current=move || is_selected().then_some("page")
                            class=move || {
                                if is_selected() {
                                    "flex-1 flex flex-col items-center py-2 text-blue-600 font-semibold"
                                } else {
                                    "flex-1 flex flex-col items-center py-2 text-gray-500 hover:text-gray-800"
                                }
                            }
                            on:click=move |_| select_tab(tab, selected, on_navigate)
                        >
                            <span class="text-xl">{tab.icon()}</span>
                            <span class="text-xs">{tab.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
