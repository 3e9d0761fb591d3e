// web_app/components/product.rs - Product display components
//
// - ProductCard: one selectable catalog entry
// - ProductGrid: responsive grid of cards
// - ProductSummary: larger read-only view used by the checkout page

use leptos::prelude::*;
use crate::web_app::model::Product;
use super::common::PriceDisplay;

const CARD_BASE_CLASS: &str = "h-64 bg-white/10 backdrop-blur-md rounded-lg \
                               border-[10px] border-white/50 overflow-hidden \
                               flex flex-col transition-all duration-300";
const IMAGE_BASE_CLASS: &str = "h-36 w-full object-cover";

/// Run `on_select` with the product's checkout route.
///
/// Sold-out products have no route, so the callback is not run and this
/// returns `false`.
pub fn select_product(product: &Product, on_select: Callback<String>) -> bool {
    match product.checkout_route() {
        Some(route) => {
            on_select.run(route);
            true
        }
        None => false,
    }
}

/// Product card
///
/// Out-of-stock products are shown in grayscale with "Not Available" in
/// place of the description, and ignore clicks.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Called with the checkout route when an available card is clicked
    on_select: Callback<String>,
) -> impl IntoView {
    let product_id = product.id;
    let available = product.is_available();

    let card_class = if available {
        format!("{CARD_BASE_CLASS} cursor-pointer hover:shadow-xl")
    } else {
        format!("{CARD_BASE_CLASS} pointer-events-none cursor-not-allowed")
    };
    let image_class = if available {
        IMAGE_BASE_CLASS.to_string()
    } else {
        format!("{IMAGE_BASE_CLASS} grayscale")
    };

    let on_click = {
        let product = product.clone();
        move |_| {
            select_product(&product, on_select);
        }
    };

    view! {
        <div
            class=card_class
            data-product-id=product_id.to_string()
            aria-disabled=(!available).to_string()
            on:click=on_click
        >
            <img
                src=product.image.clone()
                alt=product.name.clone()
                class=image_class
            />
            <div class="p-2 flex flex-col flex-1 justify-between">
                <h3 class="text-lg font-semibold text-gray-900 mb-1">
                    {product.name.clone()}
                </h3>
                <p class="text-sm text-gray-600 line-clamp-2">
                    {product.availability_text().to_string()}
                </p>
                <PriceDisplay price=product.price_display() />
            </div>
        </div>
    }
}

/// Grid of product cards, keyed by product id
#[component]
pub fn ProductGrid(
    /// Products to show, in display order
    products: Signal<Vec<Product>>,
    /// Forwarded to every card
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8 p-8">
            <For
                each=move || products.get()
                key=|p| p.id
                children=move |product| {
                    view! { <ProductCard product=product on_select=on_select /> }
                }
            />
        </div>
    }
}

/// Read-only product summary
#[component]
pub fn ProductSummary(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let image_class = if product.is_available() {
        "w-full md:w-1/3 aspect-square object-cover rounded-xl"
    } else {
        "w-full md:w-1/3 aspect-square object-cover rounded-xl grayscale"
    };

    view! {
        <div class="flex flex-col md:flex-row gap-6">
            <img src=product.image.clone() alt=product.name.clone() class=image_class />
            <div class="flex-1 space-y-4">
                <h2 class="text-3xl font-bold text-gray-900 leading-tight">
                    {product.name.clone()}
                </h2>
                <p class="text-gray-600">{product.availability_text().to_string()}</p>
                <PriceDisplay price=product.price_display() highlight=true />
            </div>
        </div>
    }
}
