//! # portal-ui
//!
//! Leptos + WASM frontend for the LLM job portal. Replaces the Vite + React
//! `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, and the REST client for the job
//! portal backend (jobs, candidates, resumes, match computations). All
//! payloads stay opaque `serde_json::Value`s; the backend owns the schema.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// Browser entry point: mounts [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("portal-ui starting, api base {}", net::api::api_base());
    leptos::mount::mount_to_body(app::App);
}
