// Storefront web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - An HTTP client for the upstream catalog service
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use storefront::web_app::api::{upstream, HttpCatalogSource, StorefrontConfig};
    use storefront::web_app::app::{shell, App as WebApp};
    use tracing_subscriber::EnvFilter;

    // Load environment variables before the filter reads RUST_LOG
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(
        "Catalog service: {} (timeout {:?})",
        config.api_base_url(),
        config.request_timeout()
    );

    let source = HttpCatalogSource::new(&config).context("failed to create catalog client")?;
    upstream::init_catalog_source(source);

    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();

        App::new()
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.clone()))
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {addr}"))?
    .run()
    .await
    .context("server terminated with an error")
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
