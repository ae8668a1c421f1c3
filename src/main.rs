//! CasePulse - Main Entry Point
//!
//! Serves the Dioxus application. All court data comes from the external
//! scraper backend (see `config`); this binary only serves the client.

use casepulse::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        backend = %casepulse::config::backend_base_url(),
        "Starting CasePulse..."
    );

    dioxus::serve(|| {
        async move {
            // No server-side API routes: search, monitoring and downloads all
            // go straight from the browser to the scraper backend.
            let router = dioxus::server::router(App);
            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] CasePulse initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
