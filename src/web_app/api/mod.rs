// web_app/api/mod.rs - Server-side access to the catalog service
//
// Configuration and the HTTP client the server functions use. Never
// compiled to WASM.

pub mod config;
pub mod upstream;

pub use config::{ConfigError, StorefrontConfig};
pub use upstream::{CatalogError, HttpCatalogSource};
