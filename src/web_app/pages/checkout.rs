// web_app/pages/checkout.rs - Checkout destination for a product card

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::model::HOME_PATH;
use crate::web_app::server_fns::get_product;

/// Parse the `:id` route segment
pub fn parse_product_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse::<i64>().ok())
}

/// Checkout page for `/checkout/:id`
///
/// Shows the selected product. Payment is handled elsewhere.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || parse_product_id(params.with(|p| p.get("id")));

    let product = Resource::new(product_id, |id| async move {
        match id {
            Some(id) => get_product(id).await,
            None => Ok(None),
        }
    });

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8 space-y-8">
            <h1 class="text-2xl font-bold text-gray-900">"Checkout"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading product..." /> }>
                {move || product.get().map(|result| match result {
                    Ok(Some(p)) => view! {
                        <div class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                            <ProductSummary product=p />
                        </div>
                    }.into_any(),
                    Ok(None) => view! {
                        <p class="text-gray-600">"Product not found"</p>
                    }.into_any(),
                    Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                })}
            </Suspense>
            <BackLink href=HOME_PATH>"Back to shop"</BackLink>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(Some("42".to_string())), Some(42));
        assert_eq!(parse_product_id(Some(" 7 ".to_string())), Some(7));
        assert_eq!(parse_product_id(Some("abc".to_string())), None);
        assert_eq!(parse_product_id(None), None);
    }
}
