// web_app/pages/home.rs - Storefront page
//
// Loads the catalog once per mount, filters it live against the search
// text and routes to checkout or the tab destinations.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::web_app::catalog::Catalog;
use crate::web_app::components::*;
use crate::web_app::model::{normalize_search_term, NavTab};
use crate::web_app::server_fns::list_products;

/// Main storefront page
///
/// The catalog resource belongs to this page's reactive owner. Unmounting
/// the page disposes it, so a response arriving afterwards updates nothing.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());

    let search_text = RwSignal::new(String::new());
    let selected_tab = RwSignal::new(NavTab::Home);

    // One fetch per mount: the source signal never changes
    let products = Resource::new(|| (), |_| list_products());

    let catalog = Memo::new(move |_| {
        products
            .get()
            .map(Catalog::from_fetch)
            .unwrap_or_default()
    });

    // Always the raw text, committed or not
    let visible = Signal::derive(move || catalog.with(|c| c.filter(&search_text.get())));

    let on_change = Callback::new(move |text: String| search_text.set(text));

    let on_request_search = Callback::new(move |()| {
        search_text.update(|text| *text = normalize_search_term(text));
    });

    // Cards and tabs decide the route, the page only follows it
    let navigate_to = Callback::new(move |route: String| {
        navigate.with_value(|nav| nav(&route, Default::default()));
    });

    view! {
        <div class="min-h-screen pb-20">
            <section class="px-8 pt-8">
                <SearchBar
                    value=search_text
                    on_change=on_change
                    on_request_search=on_request_search
                />
            </section>

            // Empty grid while the catalog is pending
            <Suspense fallback=|| view! { <div class="grid p-8"></div> }>
                {move || products.get().map(|_| view! {
                    <ProductGrid products=visible on_select=navigate_to />
                })}
            </Suspense>

            <BottomNavigation selected=selected_tab on_navigate=navigate_to />
        </div>
    }
}
