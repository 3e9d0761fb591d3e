// common/mod.rs - Shared test utilities
//
// Runs an in-process stand-in for the catalog service so the HTTP client
// and the server functions are exercised against real sockets.

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use storefront::web_app::api::{HttpCatalogSource, StorefrontConfig};

/// A running mock catalog service
pub struct MockCatalogService {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl MockCatalogService {
    /// Base URL to hand to `StorefrontConfig`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of `GET /products` requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Catalog client pointed at this service
    pub fn source(&self) -> anyhow::Result<HttpCatalogSource> {
        let config = StorefrontConfig::new(&self.base_url())?;
        Ok(HttpCatalogSource::new(&config)?)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Serve `body` with `status` on `GET /products`.
///
/// Must be called from within an actix runtime (`#[actix_web::test]`).
pub fn spawn_catalog_service(status: u16, body: impl Into<String>) -> anyhow::Result<MockCatalogService> {
    let status = StatusCode::from_u16(status)?;
    let body: String = body.into();
    let hits = Arc::new(AtomicUsize::new(0));

    let server_hits = hits.clone();
    let server = HttpServer::new(move || {
        let body = body.clone();
        let hits = server_hits.clone();
        App::new().route(
            "/products",
            web::get().to(move || {
                let body = body.clone();
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(body)
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("mock catalog service has no bound address"))?;

    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok(MockCatalogService { addr, hits, handle })
}
