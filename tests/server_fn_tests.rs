// tests/server_fn_tests.rs
// Test suite for Leptos server functions
//
// The catalog source override is process-wide, so every scenario runs
// inside one test.

mod common;

use storefront::fixtures::catalogs::ShirtAndHatCatalog;
use storefront::fixtures::TestCatalog;
use storefront::web_app::api::upstream;
use storefront::web_app::server_fns::*;

use common::spawn_catalog_service;

#[actix_web::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    let service = spawn_catalog_service(200, ShirtAndHatCatalog::json())?;
    upstream::set_test_source(service.source()?);

    // 1. list_products
    let products = list_products()
        .await
        .map_err(|e| anyhow::anyhow!("list_products failed: {}", e))?;
    assert_eq!(products, ShirtAndHatCatalog::products());

    // 2. get_product, known id (sold out products are still returned)
    let product = get_product(2)
        .await
        .map_err(|e| anyhow::anyhow!("get_product failed: {}", e))?;
    assert_eq!(product.map(|p| p.name), Some("Blue Hat".to_string()));

    // 3. get_product, unknown id
    let missing = get_product(99)
        .await
        .map_err(|e| anyhow::anyhow!("get_product failed: {}", e))?;
    assert!(missing.is_none());

    assert_eq!(service.hits(), 3);
    service.stop().await;

    // 4. failing catalog service surfaces as a server function error
    let failing = spawn_catalog_service(500, "")?;
    upstream::set_test_source(failing.source()?);

    let err = list_products().await.expect_err("a 500 must not produce products");
    assert!(err.to_string().contains("Catalog fetch failed"), "got {err}");
    assert!(get_product(1).await.is_err());

    failing.stop().await;
    Ok(())
}
