// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real function on the server and an
// HTTP stub on the client, so this file is compiled for BOTH ssr and
// hydrate. Fetching the catalog server-side keeps the upstream URL out of
// the WASM bundle.

use leptos::prelude::*;
use crate::web_app::model::Product;

#[cfg(feature = "ssr")]
fn source() -> Result<crate::web_app::api::HttpCatalogSource, ServerFnError> {
    use crate::web_app::api::{upstream, HttpCatalogSource};

    // Context first (tests, or an explicitly provided source)
    if let Some(source) = use_context::<HttpCatalogSource>() {
        return Ok(source);
    }

    if let Some(source) = upstream::get_catalog_source() {
        return Ok(source);
    }

    tracing::error!("Catalog source could not be resolved");
    Err(ServerFnError::new("Catalog source not available"))
}

/// Full product list, in catalog service order
#[server(ListProducts, "/api")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    let source = source()?;
    source.fetch_products().await.map_err(|e| {
        tracing::error!("Catalog fetch failed: {}", e);
        ServerFnError::new(format!("Catalog fetch failed: {}", e))
    })
}

/// Single product by id, `None` when the catalog has no such product
#[server(GetProduct, "/api")]
pub async fn get_product(id: i64) -> Result<Option<Product>, ServerFnError> {
    use crate::web_app::catalog::Catalog;

    let source = source()?;
    let products = source.fetch_products().await.map_err(|e| {
        tracing::error!("Catalog fetch for product {} failed: {}", id, e);
        ServerFnError::new(format!("Catalog fetch failed: {}", e))
    })?;

    let product = Catalog::new(products).find(id).cloned();
    if product.is_none() {
        tracing::info!("Product {} not in catalog", id);
    }
    Ok(product)
}
