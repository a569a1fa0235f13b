//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api/*` proxy with Leptos SSR rendering under a
//! single Axum router. The landing page is served at `/`, the dashboard at
//! `/dashboard`, and the hydrate bundle under `/pkg`.

use std::path::PathBuf;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::proxy::{ApiProxy, ProxyError};

/// Backend proxy and health check.
pub fn api_routes(proxy: ApiProxy) -> Router {
    Router::new()
        .route("/api/{*rest}", any(proxy_api))
        .route("/healthz", get(healthz))
        .with_state(proxy)
}

async fn proxy_api(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    proxy.forward(method, &uri, &headers, body).await
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or malformed `[package.metadata.leptos]`).
pub fn app(proxy: ApiProxy) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(proxy)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
