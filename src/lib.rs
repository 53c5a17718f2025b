//! # bazaar-client
//!
//! Leptos + WASM frontend for the Bazaar marketplace. All persistence and
//! business rules live behind an external REST API; this crate owns the
//! session state, route guarding, and the catalog/listing/profile views.
//!
//! Browser-only concerns (localStorage, HTTP, canvas image re-encoding)
//! are gated behind the `hydrate` feature so the rest of the crate stays
//! host-testable with plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
