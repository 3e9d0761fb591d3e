// tests/upstream_fetch_tests.rs
// HTTP catalog client against an in-process catalog service
//
// Run with: cargo test --test upstream_fetch_tests --features ssr

mod common;

use storefront::fixtures::catalogs::ShirtAndHatCatalog;
use storefront::fixtures::TestCatalog;
use storefront::web_app::api::CatalogError;
use storefront::web_app::catalog::Catalog;

use common::spawn_catalog_service;

#[actix_web::test]
async fn test_fetch_returns_products_in_server_order() -> anyhow::Result<()> {
    let service = spawn_catalog_service(200, ShirtAndHatCatalog::json())?;
    let source = service.source()?;

    let products = source.fetch_products().await?;

    assert_eq!(products, ShirtAndHatCatalog::products());
    assert_eq!(products[0].price_display(), "€10.00");
    assert_eq!(service.hits(), 1, "one fetch must issue exactly one request");

    service.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_http_error_status_is_reported() -> anyhow::Result<()> {
    let service = spawn_catalog_service(503, "{\"error\":\"maintenance\"}")?;
    let source = service.source()?;

    let result = source.fetch_products().await;
    match &result {
        Err(CatalogError::Status(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }

    // The page sees an empty catalog
    assert!(Catalog::from_fetch(result).is_empty());
    assert_eq!(service.hits(), 1, "failures are not retried");

    service.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_malformed_json_is_a_decode_error() -> anyhow::Result<()> {
    let service = spawn_catalog_service(200, "<html>oops</html>")?;
    let source = service.source()?;

    let result = source.fetch_products().await;
    assert!(matches!(result, Err(CatalogError::Decode(_))), "got {result:?}");
    assert!(Catalog::from_fetch(result).is_empty());

    service.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_wrong_schema_is_a_decode_error() -> anyhow::Result<()> {
    // price must be a decimal string, and every field is required
    let body = r#"[{"id":1,"name":"Red Shirt","price":10.0,"available":2}]"#;
    let service = spawn_catalog_service(200, body)?;
    let source = service.source()?;

    let result = source.fetch_products().await;
    assert!(matches!(result, Err(CatalogError::Decode(_))), "got {result:?}");

    service.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_empty_catalog_is_not_an_error() -> anyhow::Result<()> {
    let service = spawn_catalog_service(200, "[]")?;
    let source = service.source()?;

    let products = source.fetch_products().await?;
    assert!(products.is_empty());

    service.stop().await;
    Ok(())
}
