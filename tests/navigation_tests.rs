// tests/navigation_tests.rs
// Routing decisions for product cards and the bottom navigation

use storefront::fixtures::catalogs::ApparelCatalog;
use storefront::fixtures::TestCatalog;
use storefront::web_app::model::{checkout_path, NavTab, HOME_PATH, PROFILE_PATH};

#[test]
fn test_bottom_nav_routes() {
    let routes: Vec<Option<&str>> = NavTab::ALL.iter().map(|t| t.route()).collect();
    assert_eq!(routes, vec![Some("/"), None, Some("/profile")]);
}

#[test]
fn test_bottom_nav_labels_in_order() {
    let labels: Vec<&str> = NavTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Home", "Orders", "Account"]);
}

#[test]
fn test_route_constants() {
    assert_eq!(HOME_PATH, "/");
    assert_eq!(PROFILE_PATH, "/profile");
    assert_eq!(checkout_path(42), "/checkout/42");
}

#[test]
fn test_only_available_products_route_to_checkout() {
    for product in ApparelCatalog::products() {
        match product.checkout_route() {
            Some(route) => {
                assert!(product.available > 0);
                assert_eq!(route, format!("/checkout/{}", product.id));
            }
            None => assert_eq!(product.available, 0),
        }
    }
}
