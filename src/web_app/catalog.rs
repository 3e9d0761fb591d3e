// web_app/catalog.rs - In-memory product catalog
//
// Holds the product list fetched for one page mount. A failed fetch never
// reaches the view layer: it is logged here and becomes an empty catalog.

use std::fmt::Display;

use super::model::Product;

/// Products in server response order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Turn the outcome of a catalog fetch into the page's product state.
    ///
    /// Any error (transport, HTTP status, malformed payload) is logged and
    /// yields an empty catalog.
    pub fn from_fetch<E: Display>(result: Result<Vec<Product>, E>) -> Self {
        match result {
            Ok(products) => {
                tracing::debug!("Catalog loaded with {} products", products.len());
                Self::new(products)
            }
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                Self::default()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose name contains `text`, ignoring case
    pub fn filter(&self, text: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.matches_search(text))
            .cloned()
            .collect()
    }

    /// First product with the given id
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
