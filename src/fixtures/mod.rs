// fixtures/mod.rs - Test fixtures module
//
// Sample catalogs shared by the unit and integration tests. Each catalog
// is defined once here and served either as typed products or as the JSON
// body a catalog service would return.

pub mod catalogs;

use crate::web_app::model::Product;

/// A sample catalog as the catalog service would serve it
pub trait TestCatalog {
    /// Products in response order
    fn products() -> Vec<Product>;

    /// The `GET /products` response body
    fn json() -> String {
        serde_json::to_string(&Self::products()).unwrap_or_else(|_| "[]".to_string())
    }
}
