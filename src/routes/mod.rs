//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the Leptos app with SSR, serves the compiled WASM bundle
//! under `/pkg`, and publishes the browser's runtime config at `/config.js`.
//! The task API itself lives elsewhere; nothing here proxies it.

pub mod runtime_config;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Routes owned by the host rather than the Leptos app.
fn host_routes(config: &HostConfig) -> Router {
    let script = runtime_config::render(&config.api_base_url);
    Router::new()
        .route("/config.js", get(move || runtime_config::serve(script.clone())))
        .route("/healthz", get(healthz))
}

/// Leptos SSR frontend plus host routes and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(taskdeck_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || taskdeck_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue and CSS from the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(host_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
