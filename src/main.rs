//! Local Farmer Community - Main Entry Point
//!
//! Serves the landing page with server-side rendering and WASM hydration.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use farmer_community::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use anyhow::Context;
    use farmer_community::config::SiteConfig;
    use tower_http::trace::TraceLayer;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Local Farmer Community site...");

    dioxus::serve(|| async move {
        let config = SiteConfig::load().context("invalid site configuration")?;
        tracing::info!(
            site_title = %config.site_title,
            brand = %config.brand_text(),
            "Site configuration loaded"
        );

        let router = dioxus::server::router(App).layer(TraceLayer::new_for_http());

        anyhow::Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Local Farmer Community - WASM initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
