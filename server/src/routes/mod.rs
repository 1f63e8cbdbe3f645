//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront is a client-rendered single-page app. This router serves
//! the built client from the site root and answers every unknown path with
//! `index.html`, so deep links such as `/product/7` reach the client router.


use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health probe plus the static client with SPA fallback.
pub fn app(config: &ServerConfig) -> Router {
    let index = config.site_root.join("index.html");
    let site = ServeDir::new(&config.site_root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
