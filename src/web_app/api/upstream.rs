// web_app/api/upstream.rs - Catalog service client
//
// This module provides the HTTP client for the catalog service and the
// process-wide registration the server functions resolve it from.

use reqwest::{Client, StatusCode, Url};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

use super::config::StorefrontConfig;
use crate::web_app::model::Product;

static SOURCE: OnceLock<HttpCatalogSource> = OnceLock::new();
static TEST_SOURCE_OVERRIDE: Mutex<Option<HttpCatalogSource>> = Mutex::new(None);

/// Why a catalog fetch failed
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog service unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("catalog service answered with HTTP {0}")]
    Status(StatusCode),
    #[error("malformed catalog payload: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl CatalogError {
    fn from_body(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Decode(e)
        } else {
            CatalogError::Network(e)
        }
    }
}

/// Fetches `GET {base}/products` over HTTP
#[derive(Clone, Debug)]
pub struct HttpCatalogSource {
    client: Client,
    products_url: Url,
}

impl HttpCatalogSource {
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            products_url: config.products_url().clone(),
        })
    }

    pub fn products_url(&self) -> &Url {
        &self.products_url
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::info!("Fetching catalog from {}", self.products_url);

        let response = self
            .client
            .get(self.products_url.clone())
            .send()
            .await
            .map_err(CatalogError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = response.json().await.map_err(CatalogError::from_body)?;
        tracing::info!("Catalog fetch returned {} products", products.len());
        Ok(products)
    }
}

/// Initialize the global catalog source
pub fn init_catalog_source(source: HttpCatalogSource) {
    tracing::info!("Initializing catalog source for {}", source.products_url());
    if SOURCE.set(source).is_err() {
        tracing::warn!("Catalog source already initialized");
    } else {
        tracing::info!("Catalog source initialized successfully");
    }
}

/// Set a source override for testing
pub fn set_test_source(source: HttpCatalogSource) {
    let mut guard = TEST_SOURCE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(source);
}

/// Get the global catalog source
pub fn get_catalog_source() -> Option<HttpCatalogSource> {
    {
        let guard = TEST_SOURCE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref source) = *guard {
            return Some(source.clone());
        }
    }

    let source = SOURCE.get().cloned();
    if source.is_none() {
        tracing::warn!("Global catalog source is empty!");
    }
    source
}
