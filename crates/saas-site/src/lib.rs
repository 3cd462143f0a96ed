//! SaaS Template Marketing Site
//!
//! Leptos components for the landing page, rendered on the server by the
//! `saas-site` binary and hydrated in the browser through [`hydrate`].

pub mod app;
pub mod components;
pub mod content;
pub mod error;
pub mod menu;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod fileserv;
#[cfg(feature = "ssr")]
pub mod server;

pub use error::{Result, SiteError};
#[cfg(feature = "ssr")]
pub use server::router;

/// Browser entry point, called by the generated wasm loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
