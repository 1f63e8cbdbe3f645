//! # storefront
//!
//! Leptos + WASM frontend for the UrbanThreadz clothing storefront.
//!
//! This crate contains pages, components, and the page-scoped state machines
//! behind them (hero carousel, category listing, product detail), plus the
//! session cart and wishlist stores. Product data comes from a seeded mock
//! generator in `util::mock_catalog`; nothing is fetched over the network.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("storefront: mounting app");
    leptos::mount::mount_to_body(app::App);
}
